//! Error types for toolbox.
//!
//! Every utility reports failures through the single [`Error`] enum so the CLI
//! can surface one consistent message and exit status.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for toolbox operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Morse Errors ===
    /// A character has no entry in the Morse table.
    #[error("unsupported character for Morse code: {character:?}")]
    UnsupportedCharacter {
        /// The offending character, as it appeared in the input.
        character: char,
    },

    /// A Morse token has no entry in the reverse table.
    #[error("unsupported Morse sequence: {sequence:?}")]
    UnsupportedSequence {
        /// The offending token.
        sequence: String,
    },

    // === Calculation Errors ===
    /// A numeric or textual input was out of range.
    #[error("invalid {field}: {message}")]
    InvalidInput {
        /// Name of the rejected input.
        field: &'static str,
        /// Why it was rejected.
        message: String,
    },

    /// The unit conversion keyword is not known.
    #[error("unsupported conversion: {kind}")]
    UnsupportedConversion {
        /// The keyword that was requested.
        kind: String,
    },

    // === QR Errors ===
    /// The data could not be encoded as a QR code.
    #[error("failed to encode QR code: {message}")]
    QrEncode {
        /// Reason reported by the encoder.
        message: String,
    },

    /// Failed to encode or write an image.
    #[error("image error: {0}")]
    Image(Box<image::ImageError>),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read an input file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path that couldn't be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path that couldn't be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for toolbox operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Self::Image(Box::new(err))
    }
}

impl Error {
    /// Create an invalid input error for the named field.
    #[must_use]
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Create an unsupported conversion error.
    #[must_use]
    pub fn unsupported_conversion(kind: impl Into<String>) -> Self {
        Self::UnsupportedConversion { kind: kind.into() }
    }

    /// Check if this error came from the Morse transcoder.
    #[must_use]
    pub fn is_morse_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedCharacter { .. } | Self::UnsupportedSequence { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_character_display() {
        let err = Error::UnsupportedCharacter { character: '\u{7}' };
        let msg = err.to_string();
        assert!(msg.contains("unsupported character"));
        assert!(msg.contains("\\u{7}"));
    }

    #[test]
    fn test_unsupported_sequence_display() {
        let err = Error::UnsupportedSequence {
            sequence: ".-.-.-.-".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported Morse sequence: \".-.-.-.-\""
        );
    }

    #[test]
    fn test_invalid_input_display() {
        let err = Error::invalid_input("height", "must be greater than zero");
        assert_eq!(err.to_string(), "invalid height: must be greater than zero");
    }

    #[test]
    fn test_unsupported_conversion_display() {
        let err = Error::unsupported_conversion("km2mi");
        assert_eq!(err.to_string(), "unsupported conversion: km2mi");
    }

    #[test]
    fn test_is_morse_error() {
        assert!(Error::UnsupportedCharacter { character: '#' }.is_morse_error());
        assert!(Error::UnsupportedSequence {
            sequence: "......".to_string()
        }
        .is_morse_error());
        assert!(!Error::invalid_input("weight", "negative").is_morse_error());
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "word_separator must not be empty".to_string(),
        };
        assert!(err.to_string().contains("word_separator"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_file_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::FileRead {
            path: PathBuf::from("/tmp/notes.txt"),
            source: io_err,
        };
        assert!(err.to_string().contains("/tmp/notes.txt"));
    }

    #[test]
    fn test_qr_encode_display() {
        let err = Error::QrEncode {
            message: "data too long".to_string(),
        };
        assert_eq!(err.to_string(), "failed to encode QR code: data too long");
        assert!(!err.is_morse_error());
    }

    #[test]
    fn test_from_image_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = image::ImageError::IoError(io_err).into();
        assert!(matches!(err, Error::Image(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_file_write_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::FileWrite {
            path: PathBuf::from("/tmp/out/code.svg"),
            source: io_err,
        };
        assert!(err.to_string().contains("/tmp/out/code.svg"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
