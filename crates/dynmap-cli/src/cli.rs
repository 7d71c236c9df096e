//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dynmap_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "dynmap",
    version,
    about = "Build and render dynamic map DNA",
    long_about = "Build dynamic map DNA from JSON map scripts, or validate stored DNA.\n\n\
                  Both commands print the map container element carrying the\n\
                  serialized DNA for the rendering runtime."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix text log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a map script and print the resulting map element.
    Build(BuildArgs),

    /// Validate a stored DNA document and print its map element.
    Render(RenderArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the JSON map script.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Do not request runtime initialization of the map.
    #[arg(long = "no-init")]
    pub no_init: bool,

    /// Also print the asset requests as script elements.
    #[arg(long = "with-scripts")]
    pub with_scripts: bool,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Path to a JSON array of DNA records.
    #[arg(value_name = "DNA")]
    pub dna: PathBuf,

    /// Map id for the container element (defaults to the stored map id; must
    /// match it when both are present).
    #[arg(long = "id", value_name = "ID")]
    pub id: Option<String>,

    /// Do not request runtime initialization of the map.
    #[arg(long = "no-init")]
    pub no_init: bool,

    /// Also print the asset requests as script elements.
    #[arg(long = "with-scripts")]
    pub with_scripts: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
