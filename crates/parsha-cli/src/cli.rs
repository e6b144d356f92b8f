//! CLI argument definitions for the parsha reader tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use parsha_model::VerseCoordinate;

use crate::library::DEFAULT_DATA_DIR;

#[derive(Parser)]
#[command(
    name = "parsha",
    version,
    about = "Parsha reader data tools - coordinates, comment filters and text source settings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing `<parsha>.json` files and `metadata.json`.
    #[arg(long = "data-dir", value_name = "DIR", default_value = DEFAULT_DATA_DIR, global = true)]
    pub data_dir: PathBuf,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// List every verse coordinate of a parsha in reading order.
    Coords {
        /// Parsha index.
        parsha: u32,
    },

    /// List the verses that have at least one visible comment.
    Comments(CommentsArgs),

    /// Show or change text source settings.
    Sources(SourcesArgs),

    /// Build an application path.
    #[command(subcommand)]
    Path(PathCommand),
}

#[derive(Args)]
pub struct CommentsArgs {
    /// Parsha index.
    pub parsha: u32,

    /// Only comments starred by me.
    #[arg(long = "mine")]
    pub mine: bool,

    /// Commenter to show (repeatable). Defaults to every commenter in the parsha.
    #[arg(long = "commenter", value_name = "NAME")]
    pub commenters: Vec<String>,
}

#[derive(Args)]
pub struct SourcesArgs {
    #[command(subcommand)]
    pub action: SourcesAction,

    /// Directory holding saved settings (default: user config directory).
    #[arg(long = "settings-dir", value_name = "DIR", global = true)]
    pub settings_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum SourcesAction {
    /// Print the current settings.
    Show,
    /// Use a source as main text.
    SetMain { source: String },
    /// Flip a source in the details view.
    Toggle { source: String },
    /// Show a source in the details view.
    Enable { source: String },
}

#[derive(Subcommand)]
pub enum PathCommand {
    /// Path of a parsha page, optionally addressing a verse.
    Parsha {
        parsha: u32,
        /// Verse coordinate as `<chapter>:<verse>`.
        #[arg(long = "verse", value_name = "C:V")]
        verse: Option<VerseCoordinate>,
    },
    /// Path of a signup page.
    Signup { token: String },
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
