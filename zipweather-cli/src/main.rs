//! Binary crate for the `zipweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Human-friendly colored output
//! - Mapping failures to distinguishing exit codes

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod format;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
