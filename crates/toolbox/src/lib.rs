//! `toolbox` - Small everyday utilities
//!
//! This library provides a Morse code transcoder together with a QR code
//! generator, a BMI calculator, a tip calculator, a text analyzer and a unit
//! converter. Each
//! utility is a pure function over its input; the `toolbox` binary is a thin
//! command-line layer on top.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod bmi;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod morse;
pub mod qr;
pub mod text;
pub mod tip;

pub use bmi::{calculate_bmi, BmiCategory, BmiResult};
pub use config::Config;
pub use convert::{convert, Conversion};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use morse::{decode_from_morse, encode_to_morse, MorseTranslator, Separators, Translation};
pub use qr::{create_qr_code, render_qr, ErrorCorrection, QrFormat, QrImage, QrOptions};
pub use text::{ReadingLevel, TextAnalyzer, TextStats};
pub use tip::{calculate_tip, format_breakdown, Money, TipBreakdown};
