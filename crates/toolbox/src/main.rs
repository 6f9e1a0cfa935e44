//! `toolbox` - CLI for the toolbox utilities
//!
//! Parses arguments, loads configuration and prints the result of one
//! utility to stdout. Errors go to stderr with a non-zero exit status.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use toolbox::cli::{
    BmiCommand, Cli, Command, ConfigCommand, ConvertCommand, MorseCommand, OutputFormat,
    QrCommand, TextCommand, TipCommand,
};
use toolbox::{init_logging, text, Config, MorseTranslator, QrOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // `config validate` reports load errors itself.
    let config = match &cli.command {
        Command::Config(ConfigCommand::Validate { .. }) => Config::default(),
        _ => Config::load_from(cli.config.clone()).context("could not load configuration")?,
    };

    match cli.command {
        Command::Morse(cmd) => handle_morse(&config, &cmd),
        Command::Qr(cmd) => handle_qr(&cmd),
        Command::Bmi(cmd) => handle_bmi(&cmd),
        Command::Tip(cmd) => handle_tip(&config, &cmd),
        Command::Text(cmd) => handle_text(&config, &cmd),
        Command::Convert(cmd) => handle_convert(&cmd),
        Command::Config(cmd) => handle_config(&config, cli.config, cmd),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_morse(config: &Config, cmd: &MorseCommand) -> Result<()> {
    let separators = config.separators(cmd.letter_sep.as_deref(), cmd.word_sep.as_deref())?;
    let translator = MorseTranslator::with_separators(separators);

    let translation = match (&cmd.text, &cmd.morse) {
        (Some(text), _) => translator
            .encode_translation(text)
            .context("could not encode text")?,
        (None, Some(morse)) => translator
            .decode_translation(morse)
            .context("could not decode Morse code")?,
        (None, None) => unreachable!("clap requires --text or --morse"),
    };

    match cmd.format {
        OutputFormat::Plain => println!("{}", translation.translated),
        OutputFormat::Json => print_json(&translation)?,
    }
    Ok(())
}

fn handle_qr(cmd: &QrCommand) -> Result<()> {
    let options = QrOptions {
        size: cmd.size,
        border: cmd.border,
        format: cmd.format,
        error_correction: cmd.error_correction,
    };
    let image = toolbox::create_qr_code(&cmd.data, &cmd.output, &options)
        .context("could not create QR code")?;

    if let Some(text) = image.as_text() {
        println!("{text}");
    }
    println!("QR code saved to {}", cmd.output.display());
    Ok(())
}

fn handle_bmi(cmd: &BmiCommand) -> Result<()> {
    let result = toolbox::calculate_bmi(cmd.weight, cmd.height)?;

    match cmd.format {
        OutputFormat::Plain => {
            println!("BMI: {:.1}", result.bmi);
            println!("Category: {}", result.category);
        }
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}

fn handle_tip(config: &Config, cmd: &TipCommand) -> Result<()> {
    let tip_percent = cmd.tip.unwrap_or(config.tip.default_percent);
    let breakdown = toolbox::calculate_tip(cmd.bill, tip_percent, cmd.people, cmd.round)?;

    match cmd.format {
        OutputFormat::Plain => {
            let currency = cmd
                .currency
                .as_deref()
                .unwrap_or(&config.tip.currency_symbol);
            println!("{}", toolbox::format_breakdown(&breakdown, currency));
        }
        OutputFormat::Json => print_json(&breakdown)?,
    }
    Ok(())
}

#[derive(Serialize)]
struct TextReport<'a> {
    #[serde(flatten)]
    stats: &'a text::TextStats,
    reading_level: text::ReadingLevel,
}

fn handle_text(config: &Config, cmd: &TextCommand) -> Result<()> {
    let content = match (&cmd.text, &cmd.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path).map_err(|source| toolbox::Error::FileRead {
            path: path.clone(),
            source,
        })?,
        (None, None) => unreachable!("clap requires a file or --text"),
    };

    let stats = config.text_analyzer().analyze(&content);
    let reading_level = text::level_for(&stats);

    match cmd.format {
        OutputFormat::Plain => {
            println!("=== Text Analysis Results ===");
            println!("Word count: {}", stats.word_count);
            println!("Character count: {}", stats.character_count);
            println!(
                "Character count (no spaces): {}",
                stats.character_count_no_spaces
            );
            println!("Sentence count: {}", stats.sentence_count);
            println!("Paragraph count: {}", stats.paragraph_count);
            println!("Reading time: {:.1} minutes", stats.reading_time_minutes);
            println!("Reading level: {reading_level}");

            if !stats.most_common_words.is_empty() {
                println!();
                println!("Most common words:");
                for (word, count) in &stats.most_common_words {
                    println!("  {word}: {count}");
                }
            }
        }
        OutputFormat::Json => print_json(&TextReport {
            stats: &stats,
            reading_level,
        })?,
    }
    Ok(())
}

fn handle_convert(cmd: &ConvertCommand) -> Result<()> {
    let result = toolbox::convert(&cmd.kind, cmd.value)?;
    println!("{result:.5}");
    Ok(())
}

fn handle_config(
    config: &Config,
    config_path: Option<std::path::PathBuf>,
    cmd: ConfigCommand,
) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                print_json(config)?;
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Morse]");
                println!("  Letter separator:   {:?}", config.morse.letter_separator);
                println!("  Word separator:     {:?}", config.morse.word_separator);
                println!();
                println!("[Tip]");
                println!("  Default percent:    {}", config.tip.default_percent);
                println!("  Currency symbol:    {}", config.tip.currency_symbol);
                println!();
                println!("[Text]");
                println!("  Words per minute:   {}", config.text.words_per_minute);
                println!("  Common words limit: {}", config.text.common_words_limit);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            info!(path = %path.display(), "validating configuration");
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path)).context("configuration is invalid")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
