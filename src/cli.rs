// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `clipinc`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "clipinc",
    version,
    about = "Watch a directory and put the next incremented filename on the clipboard.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to watch. Overrides `[watch].directory` from the config.
    #[arg(long, value_name = "PATH")]
    pub dir: Option<String>,

    /// Path to the config file (TOML). Missing file means defaults.
    ///
    /// Default: `clipinc.toml` in the current working directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Create the watched directory without asking if it does not exist.
    #[arg(long)]
    pub create_dir: bool,

    /// Do not read commands from stdin; run until Ctrl-C.
    #[arg(long)]
    pub no_console: bool,

    /// Keep the incremented name in memory instead of the system clipboard.
    #[arg(long)]
    pub no_clipboard: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CLIPINC_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
