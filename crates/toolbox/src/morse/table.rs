//! International Morse code tables.
//!
//! The forward table is the single source of truth; the reverse table is
//! derived from it on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// International Morse code for letters, digits and common punctuation.
///
/// The space character is not listed; it is handled as a word boundary.
pub const MORSE_CODE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

static FORWARD: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| MORSE_CODE_TABLE.iter().copied().collect());

static REVERSE: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    MORSE_CODE_TABLE
        .iter()
        .map(|&(symbol, code)| (code, symbol))
        .collect()
});

/// Look up the Morse code for an uppercase symbol.
#[must_use]
pub fn code_for(symbol: char) -> Option<&'static str> {
    FORWARD.get(&symbol).copied()
}

/// Look up the symbol for a Morse code token.
#[must_use]
pub fn symbol_for(code: &str) -> Option<char> {
    REVERSE.get(code).copied()
}

/// Number of symbols in the table.
#[must_use]
pub fn len() -> usize {
    MORSE_CODE_TABLE.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_injective() {
        let codes: HashSet<&str> = MORSE_CODE_TABLE.iter().map(|&(_, code)| code).collect();
        assert_eq!(codes.len(), MORSE_CODE_TABLE.len());
    }

    #[test]
    fn test_symbols_are_unique() {
        let symbols: HashSet<char> = MORSE_CODE_TABLE.iter().map(|&(s, _)| s).collect();
        assert_eq!(symbols.len(), MORSE_CODE_TABLE.len());
    }

    #[test]
    fn test_codes_use_only_dots_and_dashes() {
        for &(symbol, code) in MORSE_CODE_TABLE {
            assert!(!code.is_empty(), "empty code for {symbol:?}");
            assert!(
                code.chars().all(|c| c == '.' || c == '-'),
                "bad code for {symbol:?}: {code}"
            );
        }
    }

    #[test]
    fn test_reverse_matches_forward() {
        for &(symbol, code) in MORSE_CODE_TABLE {
            assert_eq!(code_for(symbol), Some(code));
            assert_eq!(symbol_for(code), Some(symbol));
        }
    }

    #[test]
    fn test_covers_alphabet_and_digits() {
        for symbol in ('A'..='Z').chain('0'..='9') {
            assert!(code_for(symbol).is_some(), "missing {symbol}");
        }
        assert_eq!(len(), 54);
    }

    #[test]
    fn test_lowercase_not_in_table() {
        assert!(code_for('a').is_none());
        assert!(code_for(' ').is_none());
    }

    #[test]
    fn test_unknown_sequence() {
        assert!(symbol_for(".-.-.-.-").is_none());
        assert!(symbol_for("").is_none());
    }
}
