//! Human-readable byte counts
//!
//! Sizes are stepped by powers of 1000 (decimal units), so `1000` bytes is
//! `1.0K`. Every formatted size is four characters wide for sizes below
//! 10,000T, which keeps the size column of the tree aligned.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
const STEP: f64 = 1000.0;

static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d+)(B|K|M|G|T)?$").expect("SIZE_PATTERN regex is invalid")
});

/// Format a byte count as a fixed-width string such as `" 10M"` or `"1.2G"`.
///
/// Values of zero or at least ten are printed as a right-aligned integer in a
/// three character field; values between zero and ten keep one decimal.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= STEP && unit < UNITS.len() - 1 {
        size /= STEP;
        unit += 1;
    }

    if size == 0.0 || size >= 10.0 {
        format!("{:>3.0}{}", size, UNITS[unit])
    } else {
        format!("{:.1}{}", size, UNITS[unit])
    }
}

/// Parse a size threshold like `500`, `10K` or `2G` into bytes.
///
/// Units use the same decimal steps as [`format_size`]. A negative number
/// means "no threshold" and yields `None`.
pub fn parse_size(input: &str) -> Result<Option<u64>> {
    let invalid = || Error::InvalidMinSize(input.to_string());

    let caps = SIZE_PATTERN.captures(input).ok_or_else(invalid)?;
    let value: i64 = caps[1].parse().map_err(|_| invalid())?;
    if value < 0 {
        return Ok(None);
    }

    let multiplier: u64 = match caps.get(2).map(|m| m.as_str()) {
        Some("K") => 1_000,
        Some("M") => 1_000_000,
        Some("G") => 1_000_000_000,
        Some("T") => 1_000_000_000_000,
        _ => 1,
    };

    (value as u64)
        .checked_mul(multiplier)
        .map(Some)
        .ok_or_else(invalid)
}
