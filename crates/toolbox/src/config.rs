//! Configuration management for toolbox.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::morse::{Separators, DEFAULT_LETTER_SEPARATOR, DEFAULT_WORD_SEPARATOR};
use crate::text::{TextAnalyzer, DEFAULT_COMMON_WORDS_LIMIT, DEFAULT_WORDS_PER_MINUTE};
use crate::tip::DEFAULT_TIP_PERCENT;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "toolbox";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "TOOLBOX_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `TOOLBOX_`, sections joined by `__`,
///    e.g. `TOOLBOX_MORSE__WORD_SEPARATOR`)
/// 2. TOML config file at `~/.config/toolbox/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Morse translator configuration.
    pub morse: MorseConfig,
    /// Tip calculator configuration.
    pub tip: TipConfig,
    /// Text analyzer configuration.
    pub text: TextConfig,
}

/// Morse-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorseConfig {
    /// Separator between letters of a word.
    pub letter_separator: String,
    /// Separator between words.
    pub word_separator: String,
}

/// Tip calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipConfig {
    /// Tip percentage used when none is given.
    pub default_percent: f64,
    /// Symbol printed before amounts.
    pub currency_symbol: String,
}

/// Text analyzer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Reading speed for reading time estimates.
    pub words_per_minute: u32,
    /// Number of most common words to report.
    pub common_words_limit: usize,
}

impl Default for MorseConfig {
    fn default() -> Self {
        Self {
            letter_separator: DEFAULT_LETTER_SEPARATOR.to_string(),
            word_separator: DEFAULT_WORD_SEPARATOR.to_string(),
        }
    }
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            default_percent: DEFAULT_TIP_PERCENT,
            currency_symbol: "$".to_string(),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            common_words_limit: DEFAULT_COMMON_WORDS_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment variables
    /// still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        debug!(path = %config_file.display(), "loading configuration");

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.morse.letter_separator.is_empty() {
            return Err(Error::ConfigValidation {
                message: "morse.letter_separator must not be empty".to_string(),
            });
        }

        if self.morse.word_separator.is_empty() {
            return Err(Error::ConfigValidation {
                message: "morse.word_separator must not be empty".to_string(),
            });
        }

        if !self.tip.default_percent.is_finite() || self.tip.default_percent < 0.0 {
            return Err(Error::ConfigValidation {
                message: format!(
                    "tip.default_percent must be a non-negative number, got {}",
                    self.tip.default_percent
                ),
            });
        }

        if self.text.words_per_minute == 0 {
            return Err(Error::ConfigValidation {
                message: "text.words_per_minute must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Build Morse separators, letting `letter`/`word` override the configured
    /// values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the resulting separator is empty.
    pub fn separators(&self, letter: Option<&str>, word: Option<&str>) -> Result<Separators> {
        Separators::new(
            letter.unwrap_or(&self.morse.letter_separator),
            word.unwrap_or(&self.morse.word_separator),
        )
    }

    /// Build a text analyzer from the text settings.
    #[must_use]
    pub fn text_analyzer(&self) -> TextAnalyzer {
        TextAnalyzer::new()
            .with_words_per_minute(self.text.words_per_minute)
            .with_common_words_limit(self.text.common_words_limit)
    }
}
