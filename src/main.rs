//! CLI entry point for dtree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dtree::{
    BuilderConfig, RenderConfig, Spinner, TreeBuilder, TreeFormatter, parse_size, print_json,
    validate_root,
};
use tracing::Level;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    #[value(alias = "automatic")]
    Auto,
    /// Always use colors
    #[value(aliases = ["on", "yes"])]
    Always,
    /// Never use colors
    #[value(aliases = ["off", "no"])]
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dtree")]
#[command(about = "Show disk usage as a tree with sizes and file counts")]
#[command(disable_version_flag = true)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show only N levels below the root (-1 = unlimited)
    #[arg(
        short = 'L',
        long = "max-depth",
        value_name = "N",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    max_depth: i64,

    /// Sort siblings by: name, size, files
    #[arg(short = 's', long = "sort", value_name = "KEY", default_value = "name")]
    sort: String,

    /// Show only files/dirs larger than SIZE (units B, K, M, G, T; -1 = no limit)
    #[arg(
        long = "min-size",
        value_name = "SIZE",
        default_value = "-1",
        allow_hyphen_values = true
    )]
    min_size: String,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Number of parallel workers for directory traversal
    /// (0 or negative = auto-detect, 1 = sequential, N = use N workers)
    #[arg(
        short = 'j',
        long = "jobs",
        visible_alias = "procs",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    jobs: i64,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Log skipped entries and scan timing to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Print version and exit
    #[arg(short = 'V', long = "version")]
    version: bool,
}

/// Worker count for the builder; any negative request means auto.
fn parallel_workers(jobs: i64) -> usize {
    usize::try_from(jobs).unwrap_or(0)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> dtree::Result<()> {
    // Validate every option before scanning so a typo never costs a full scan
    let use_color = !args.json && should_use_color(args.color);
    let config = RenderConfig {
        min_size: parse_size(&args.min_size)?,
        ..RenderConfig::from_raw(args.max_depth, -1, &args.sort, use_color)?
    };
    validate_root(&args.path)?;

    let builder = TreeBuilder::new(BuilderConfig {
        parallel_workers: parallel_workers(args.jobs),
    });
    let spinner = Spinner::stderr_if_terminal();
    let tree = builder.build(&args.path);
    if let Some(spinner) = spinner {
        spinner.stop();
    }

    if args.json {
        print_json(&tree, &config)
    } else {
        TreeFormatter::new(config).print(&tree)
    }
}

fn main() {
    let args = Args::parse();
    if args.version {
        println!("dtree version {}", env!("CARGO_PKG_VERSION"));
        return;
    }
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("dtree: {}", e);
        process::exit(1);
    }
}
