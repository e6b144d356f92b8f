//! Parsha reader command-line tool.

use clap::{ColorChoice, Parser};
use parsha_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use parsha_cli::commands::{run_comments, run_coords, run_path, run_sources};
use parsha_cli::library::ParshaLibrary;
use parsha_cli::logging::{LogConfig, LogFormat, init_logging};
use parsha_cli::summary::sources_table;
use parsha_model::VerseCoordinate;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let library = ParshaLibrary::new(&cli.data_dir);
    let outcome = match &cli.command {
        Command::Coords { parsha } => {
            run_coords(&library, *parsha).map(|coords| print_coords(&coords))
        }
        Command::Comments(args) => {
            run_comments(&library, args).map(|coords| print_coords(&coords))
        }
        Command::Sources(args) => {
            run_sources(&library, args).map(|config| println!("{}", sources_table(&config)))
        }
        Command::Path(command) => {
            println!("{}", run_path(command));
            Ok(())
        }
    };
    let exit_code = match outcome {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn print_coords(coords: &[VerseCoordinate]) {
    for coord in coords {
        println!("{coord}");
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi)
}
