//! Command-line interface for toolbox.
//!
//! This module provides the CLI structure for the `toolbox` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    BmiCommand, ConfigCommand, ConvertCommand, MorseCommand, OutputFormat, QrCommand,
    TextCommand, TipCommand,
};

/// toolbox - Small everyday utilities
///
/// Translate Morse code, generate QR codes, calculate BMI and tips, analyze
/// text and convert units from the command line.
#[derive(Debug, Parser)]
#[command(name = "toolbox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate text to and from Morse code
    Morse(MorseCommand),

    /// Generate a QR code image
    Qr(QrCommand),

    /// Calculate body mass index
    Bmi(BmiCommand),

    /// Calculate a tip and split the bill
    Tip(TipCommand),

    /// Show word, sentence and reading statistics for text
    Text(TextCommand),

    /// Convert lengths and temperatures
    Convert(ConvertCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
