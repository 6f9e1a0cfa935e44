//! Text to Morse encoding and Morse to text decoding.

use serde::Serialize;
use tracing::{debug, trace};

use super::table;
use crate::error::{Error, Result};

/// Default separator between letters of one word.
pub const DEFAULT_LETTER_SEPARATOR: &str = " ";

/// Default separator between words.
pub const DEFAULT_WORD_SEPARATOR: &str = " / ";

/// Delimiters used between Morse letters and words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Separators {
    letter: String,
    word: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            letter: DEFAULT_LETTER_SEPARATOR.to_string(),
            word: DEFAULT_WORD_SEPARATOR.to_string(),
        }
    }
}

impl Separators {
    /// Create a separator pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either separator is empty, since an
    /// empty delimiter cannot be split on.
    pub fn new(letter: impl Into<String>, word: impl Into<String>) -> Result<Self> {
        let letter = letter.into();
        let word = word.into();
        if letter.is_empty() {
            return Err(Error::invalid_input(
                "letter separator",
                "must not be empty",
            ));
        }
        if word.is_empty() {
            return Err(Error::invalid_input("word separator", "must not be empty"));
        }
        Ok(Self { letter, word })
    }

    /// Separator between letters.
    #[must_use]
    pub fn letter(&self) -> &str {
        &self.letter
    }

    /// Separator between words.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// A translation and the input it was produced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// The input as given.
    pub source: String,
    /// The translated output.
    pub translated: String,
}

/// Morse encoder/decoder bound to a pair of separators.
#[derive(Debug, Clone, Default)]
pub struct MorseTranslator {
    separators: Separators,
}

impl MorseTranslator {
    /// Create a translator using the default separators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator with custom separators.
    #[must_use]
    pub fn with_separators(separators: Separators) -> Self {
        Self { separators }
    }

    /// The separators in use.
    #[must_use]
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Convert plain text to Morse code.
    ///
    /// Characters are uppercased before lookup. Only the ASCII space acts as a
    /// word boundary; runs of spaces produce a single word separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCharacter`] for the first character that
    /// has no Morse representation.
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut words: Vec<String> = Vec::new();
        let mut letters: Vec<&'static str> = Vec::new();

        for character in text.chars() {
            if character == ' ' {
                if !letters.is_empty() {
                    words.push(letters.join(self.separators.letter.as_str()));
                    letters.clear();
                }
                continue;
            }
            letters.push(lookup_code(character)?);
        }

        if !letters.is_empty() {
            words.push(letters.join(self.separators.letter.as_str()));
        }

        debug!(words = words.len(), "encoded text to Morse");
        Ok(words.join(self.separators.word.as_str()))
    }

    /// Convert Morse code back into text.
    ///
    /// Empty and whitespace-only input decodes to an empty string. Decoded
    /// words are joined with a single space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSequence`] for the first token that is not
    /// a known Morse code.
    pub fn decode(&self, morse: &str) -> Result<String> {
        if morse.trim().is_empty() {
            return Ok(String::new());
        }

        let mut words: Vec<String> = Vec::new();
        for raw_word in morse.split(self.separators.word.as_str()) {
            let word = raw_word.trim();
            if word.is_empty() {
                continue;
            }

            let decoded = word
                .split(self.separators.letter.as_str())
                .filter(|token| !token.is_empty())
                .map(|token| {
                    table::symbol_for(token).ok_or_else(|| Error::UnsupportedSequence {
                        sequence: token.to_string(),
                    })
                })
                .collect::<Result<String>>()?;
            trace!(word = %decoded, "decoded word");
            words.push(decoded);
        }

        debug!(words = words.len(), "decoded Morse to text");
        Ok(words.join(" "))
    }

    /// Encode and keep the source alongside the result.
    ///
    /// # Errors
    ///
    /// See [`MorseTranslator::encode`].
    pub fn encode_translation(&self, text: &str) -> Result<Translation> {
        Ok(Translation {
            source: text.to_string(),
            translated: self.encode(text)?,
        })
    }

    /// Decode and keep the source alongside the result.
    ///
    /// # Errors
    ///
    /// See [`MorseTranslator::decode`].
    pub fn decode_translation(&self, morse: &str) -> Result<Translation> {
        Ok(Translation {
            source: morse.to_string(),
            translated: self.decode(morse)?,
        })
    }
}

fn lookup_code(character: char) -> Result<&'static str> {
    let mut upper = character.to_uppercase();
    let code = match (upper.next(), upper.next()) {
        (Some(symbol), None) => table::code_for(symbol),
        _ => None,
    };
    code.ok_or(Error::UnsupportedCharacter { character })
}

/// Convert text to Morse code with the default separators.
///
/// # Errors
///
/// Returns [`Error::UnsupportedCharacter`] if the text contains a character
/// outside the Morse table.
pub fn encode_to_morse(text: &str) -> Result<String> {
    MorseTranslator::new().encode(text)
}

/// Convert Morse code to text with the default separators.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSequence`] if a token is not a Morse code.
pub fn decode_from_morse(morse: &str) -> Result<String> {
    MorseTranslator::new().decode(morse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sos() {
        assert_eq!(encode_to_morse("SOS").unwrap(), "... --- ...");
    }

    #[test]
    fn test_encode_mixed_case_words() {
        assert_eq!(
            encode_to_morse("Hello World").unwrap(),
            ".... . .-.. .-.. --- / .-- --- .-. .-.. -.."
        );
    }

    #[test]
    fn test_encode_digits() {
        assert_eq!(encode_to_morse("2024").unwrap(), "..--- ----- ..--- ....-");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_to_morse("").unwrap(), "");
        assert_eq!(encode_to_morse("    ").unwrap(), "");
    }

    #[test]
    fn test_encode_ignores_extra_spaces() {
        assert_eq!(encode_to_morse("  a   b  ").unwrap(), ".- / -...");
    }

    #[test]
    fn test_encode_control_character_fails() {
        let err = encode_to_morse("AB\u{7}C").unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedCharacter { character: '\u{7}' }
        ));
    }

    #[test]
    fn test_encode_tab_is_not_a_word_boundary() {
        let err = encode_to_morse("A\tB").unwrap_err();
        assert!(matches!(err, Error::UnsupportedCharacter { character: '\t' }));
    }

    #[test]
    fn test_encode_multi_char_uppercase_fails() {
        let err = encode_to_morse("straße").unwrap_err();
        assert!(matches!(err, Error::UnsupportedCharacter { character: 'ß' }));
    }

    #[test]
    fn test_decode_hello() {
        assert_eq!(decode_from_morse(".... . .-.. .-.. ---").unwrap(), "HELLO");
    }

    #[test]
    fn test_decode_empty_and_blank() {
        assert_eq!(decode_from_morse("").unwrap(), "");
        assert_eq!(decode_from_morse("   ").unwrap(), "");
        assert_eq!(decode_from_morse("\n\t").unwrap(), "");
    }

    #[test]
    fn test_decode_unknown_sequence() {
        let err = decode_from_morse(".-.-.-.-").unwrap_err();
        match err {
            Error::UnsupportedSequence { sequence } => assert_eq!(sequence, ".-.-.-.-"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_skips_empty_words_and_tokens() {
        assert_eq!(
            decode_from_morse(" / ...  ---  ... /  / .- / ").unwrap(),
            "SOS A"
        );
    }

    #[test]
    fn test_round_trip() {
        for text in [
            "Community Toolbox",
            "Python 3.11",
            "Test-driven development!",
        ] {
            let encoded = encode_to_morse(text).unwrap();
            assert_eq!(decode_from_morse(&encoded).unwrap(), text.to_uppercase());
        }
    }

    #[test]
    fn test_round_trip_collapses_spaces() {
        let encoded = encode_to_morse("hi   there").unwrap();
        assert_eq!(decode_from_morse(&encoded).unwrap(), "HI THERE");
    }

    #[test]
    fn test_round_trip_every_symbol() {
        let text: String = table::MORSE_CODE_TABLE.iter().map(|&(s, _)| s).collect();
        let encoded = encode_to_morse(&text).unwrap();
        assert_eq!(decode_from_morse(&encoded).unwrap(), text);
    }

    #[test]
    fn test_custom_separators() {
        let translator = MorseTranslator::with_separators(Separators::new("|", " // ").unwrap());
        let encoded = translator.encode("ab cd").unwrap();
        assert_eq!(encoded, ".-|-... // -.-.|-..");
        assert_eq!(translator.decode(&encoded).unwrap(), "AB CD");
    }

    #[test]
    fn test_empty_separator_rejected() {
        assert!(Separators::new("", " / ").is_err());
        assert!(Separators::new(" ", "").is_err());
    }

    #[test]
    fn test_default_separators() {
        let separators = Separators::default();
        assert_eq!(separators.letter(), " ");
        assert_eq!(separators.word(), " / ");
    }

    #[test]
    fn test_translation_keeps_source() {
        let translator = MorseTranslator::new();
        let translation = translator.encode_translation("abc").unwrap();
        assert_eq!(translation.source, "abc");
        assert_eq!(translation.translated, ".- -... -.-.");

        let back = translator.decode_translation(&translation.translated).unwrap();
        assert_eq!(back.translated, "ABC");
    }

    #[test]
    fn test_translation_serialize() {
        let translation = Translation {
            source: "e".to_string(),
            translated: ".".to_string(),
        };
        let json = serde_json::to_string(&translation).unwrap();
        assert_eq!(json, r#"{"source":"e","translated":"."}"#);
    }
}
