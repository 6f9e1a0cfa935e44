//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand, ValueEnum};

use crate::qr::{ErrorCorrection, QrFormat, DEFAULT_BORDER, DEFAULT_MODULE_SIZE};

/// Morse command arguments.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "morse"])))]
pub struct MorseCommand {
    /// Plain text to convert into Morse code
    #[arg(long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Morse code to convert back into text
    #[arg(long, allow_hyphen_values = true)]
    pub morse: Option<String>,

    /// Separator between Morse letters (default: space)
    #[arg(long, allow_hyphen_values = true, value_name = "SEP")]
    pub letter_sep: Option<String>,

    /// Separator between Morse words (default: " / ")
    #[arg(long, allow_hyphen_values = true, value_name = "SEP")]
    pub word_sep: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// QR code command arguments.
#[derive(Debug, Args)]
pub struct QrCommand {
    /// Data to encode
    #[arg(allow_hyphen_values = true)]
    pub data: String,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Image format
    #[arg(long, value_enum, default_value_t = QrFormat::Png)]
    pub format: QrFormat,

    /// Pixels per module
    #[arg(long, default_value_t = DEFAULT_MODULE_SIZE)]
    pub size: u32,

    /// Quiet zone width in modules
    #[arg(long, default_value_t = DEFAULT_BORDER)]
    pub border: u32,

    /// Error correction level
    #[arg(long, value_enum, default_value_t = ErrorCorrection::M)]
    pub error_correction: ErrorCorrection,
}

/// BMI command arguments.
#[derive(Debug, Args)]
pub struct BmiCommand {
    /// Weight in kilograms
    #[arg(short, long)]
    pub weight: f64,

    /// Height in metres
    #[arg(long)]
    pub height: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Tip command arguments.
#[derive(Debug, Args)]
pub struct TipCommand {
    /// Bill amount before tip
    #[arg(allow_negative_numbers = true)]
    pub bill: f64,

    /// Tip percentage to apply (default from config, normally 20)
    #[arg(short, long)]
    pub tip: Option<f64>,

    /// Number of people splitting the bill
    #[arg(short, long, default_value = "1")]
    pub people: u32,

    /// Round up the per-person amount to the next cent
    #[arg(short, long)]
    pub round: bool,

    /// Currency symbol to prefix amounts with (default from config, normally $)
    #[arg(long)]
    pub currency: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Text analysis command arguments.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "text"])))]
pub struct TextCommand {
    /// File to analyze
    pub file: Option<PathBuf>,

    /// Text to analyze instead of a file
    #[arg(short, long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Unit conversion command arguments.
#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// Conversion keyword: m2ft, ft2m, c2f or f2c
    pub kind: String,

    /// Value to convert
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}
