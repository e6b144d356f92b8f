//! Library components for the `parsha` command-line tool.

pub mod cli;
pub mod commands;
pub mod library;
pub mod logging;
pub mod summary;
