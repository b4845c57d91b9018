//! Tree formatter for console output
//!
//! This module provides `TreeFormatter` which renders a built `Node` tree
//! with sizes, file counts and box-drawing prefixes, followed by a summary
//! line.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::error::Result;
use crate::size::format_size;
use crate::tree::Node;

use super::config::RenderConfig;
use super::utils::{child_prefix, connector, visible_children};

/// Formatter for the size tree.
///
/// Holds its own configuration, so any number of formatters can render the
/// same tree at once with different settings.
pub struct TreeFormatter {
    config: RenderConfig,
}

impl TreeFormatter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render to a plain string without color codes.
    pub fn format(&self, node: &Node) -> Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.render(node, &mut out)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    /// Render to stdout, colored if the configuration asks for it.
    pub fn print(&self, node: &Node) -> Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.render(node, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    /// Render the tree and its summary line to any color-capable sink.
    pub fn render<W: WriteColor>(&self, node: &Node, out: &mut W) -> Result<()> {
        self.render_node(node, out, "", true)?;
        writeln!(out)?;
        writeln!(
            out,
            "{} directories, {} files, {} bytes",
            node.dir_count, node.file_count, node.size
        )?;
        Ok(())
    }

    fn render_node<W: WriteColor>(
        &self,
        node: &Node,
        out: &mut W,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<()> {
        if !self.config.shows_depth(node.depth) {
            return Ok(());
        }

        let is_root = node.depth == 0;
        if !is_root {
            write!(out, "{}{}", prefix, connector(is_last))?;
        }
        self.write_line_body(node, out)?;

        if !self.config.shows_depth(node.depth + 1) {
            return Ok(());
        }

        let next_prefix = if is_root {
            String::new()
        } else {
            child_prefix(prefix, is_last)
        };
        let children = visible_children(node, &self.config);
        let last = children.len().saturating_sub(1);
        for (i, child) in children.into_iter().enumerate() {
            self.render_node(child, out, &next_prefix, i == last)?;
        }
        Ok(())
    }

    /// `<size> <name>[/][ [<n> files]]` and the line break.
    fn write_line_body<W: WriteColor>(&self, node: &Node, out: &mut W) -> io::Result<()> {
        self.write_colored(out, &format_size(node.size), Color::Green)?;
        write!(out, " ")?;

        if node.is_dir {
            self.write_colored(out, &node.name, Color::Blue)?;
            write!(out, "/")?;
            if node.file_count > 0 {
                write!(out, " ")?;
                self.write_colored(out, &format!("[{} files]", node.file_count), Color::Yellow)?;
            }
        } else {
            write!(out, "{}", node.name)?;
        }
        writeln!(out)
    }

    fn write_colored<W: WriteColor>(&self, out: &mut W, text: &str, color: Color) -> io::Result<()> {
        if !self.config.use_color {
            return write!(out, "{}", text);
        }
        out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(out, "{}", text)?;
        out.reset()
    }
}
