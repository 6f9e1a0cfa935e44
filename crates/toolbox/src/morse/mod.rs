//! Morse code translation.
//!
//! Converts between plain text and International Morse code using a fixed
//! symbol table. Letters within a word are separated by a letter separator
//! (default `" "`), words by a word separator (default `" / "`).
//!
//! # Example
//!
//! ```
//! use toolbox::morse::{decode_from_morse, encode_to_morse};
//!
//! let morse = encode_to_morse("SOS").unwrap();
//! assert_eq!(morse, "... --- ...");
//! assert_eq!(decode_from_morse(&morse).unwrap(), "SOS");
//! ```

mod codec;
pub mod table;

pub use codec::{
    decode_from_morse, encode_to_morse, MorseTranslator, Separators, Translation,
    DEFAULT_LETTER_SEPARATOR, DEFAULT_WORD_SEPARATOR,
};
