//! Text statistics: word, sentence and paragraph counts, reading time and
//! the most frequent words.

use std::collections::{HashMap, HashSet};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Average adult reading speed.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Default number of entries in [`TextStats::most_common_words`].
pub const DEFAULT_COMMON_WORDS_LIMIT: usize = 10;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
        "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
        "them",
    ]
    .into_iter()
    .collect()
});

/// Statistics for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStats {
    /// Number of words.
    pub word_count: usize,
    /// Number of characters (Unicode scalar values).
    pub character_count: usize,
    /// Characters excluding spaces, newlines and tabs.
    pub character_count_no_spaces: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of blank-line separated paragraphs.
    pub paragraph_count: usize,
    /// Estimated reading time.
    pub reading_time_minutes: f64,
    /// Most frequent non-stop words with their counts.
    pub most_common_words: Vec<(String, usize)>,
}

/// Rough readability estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadingLevel {
    /// Short words and short sentences.
    Easy,
    /// Moderate word and sentence length.
    Medium,
    /// Long words or long sentences.
    Hard,
    /// No words to judge.
    Unknown,
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Computes [`TextStats`] for text.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    words_per_minute: u32,
    common_words_limit: usize,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            common_words_limit: DEFAULT_COMMON_WORDS_LIMIT,
        }
    }
}

impl TextAnalyzer {
    /// Create an analyzer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reading speed used for reading time. Zero is treated as one.
    #[must_use]
    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute.max(1);
        self
    }

    /// Set how many entries `most_common_words` keeps.
    #[must_use]
    pub fn with_common_words_limit(mut self, limit: usize) -> Self {
        self.common_words_limit = limit;
        self
    }

    /// Analyze text.
    #[must_use]
    pub fn analyze(&self, text: &str) -> TextStats {
        let character_count = text.chars().count();
        if text.trim().is_empty() {
            return TextStats {
                word_count: 0,
                character_count,
                character_count_no_spaces: 0,
                sentence_count: 0,
                paragraph_count: 0,
                reading_time_minutes: 0.0,
                most_common_words: Vec::new(),
            };
        }

        let words = words(text);
        let word_count = words.len();
        #[allow(clippy::cast_precision_loss)]
        let reading_time_minutes = word_count as f64 / f64::from(self.words_per_minute);
        let stats = TextStats {
            word_count,
            character_count,
            character_count_no_spaces: count_non_space(text),
            sentence_count: count_sentences(text),
            paragraph_count: count_paragraphs(text),
            reading_time_minutes,
            most_common_words: self.most_common(&words),
        };
        debug!(
            words = stats.word_count,
            sentences = stats.sentence_count,
            paragraphs = stats.paragraph_count,
            "analyzed text"
        );
        stats
    }

    /// Count every word, including stop words.
    #[must_use]
    pub fn word_frequency(&self, text: &str) -> HashMap<String, usize> {
        let mut frequency = HashMap::new();
        for word in words(text) {
            *frequency.entry(word).or_insert(0) += 1;
        }
        frequency
    }

    /// Estimate how hard the text is to read from average word and sentence
    /// length.
    #[must_use]
    pub fn reading_level(&self, text: &str) -> ReadingLevel {
        level_for(&self.analyze(text))
    }

    fn most_common(&self, words: &[String]) -> Vec<(String, usize)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for word in words {
            if STOP_WORDS.contains(word.as_str()) || word.chars().count() <= 2 {
                continue;
            }
            match index.get(word.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(word, counts.len());
                    counts.push((word.clone(), 1));
                }
            }
        }

        // Stable sort keeps first-seen order among equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(self.common_words_limit);
        counts
    }
}

/// Reading level for precomputed statistics.
#[must_use]
pub fn level_for(stats: &TextStats) -> ReadingLevel {
    if stats.word_count == 0 {
        return ReadingLevel::Unknown;
    }

    #[allow(clippy::cast_precision_loss)]
    let (avg_word_length, avg_sentence_length) = (
        stats.character_count_no_spaces as f64 / stats.word_count as f64,
        stats.word_count as f64 / stats.sentence_count.max(1) as f64,
    );

    if avg_word_length < 4.5 && avg_sentence_length < 15.0 {
        ReadingLevel::Easy
    } else if avg_word_length < 5.5 && avg_sentence_length < 20.0 {
        ReadingLevel::Medium
    } else {
        ReadingLevel::Hard
    }
}

fn words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn count_non_space(text: &str) -> usize {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\t'))
        .count()
}

fn count_sentences(text: &str) -> usize {
    SENTENCE_END
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

fn count_paragraphs(text: &str) -> usize {
    text.split("\n\n").filter(|p| !p.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty_text() {
        let stats = TextAnalyzer::new().analyze("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.character_count, 0);
        assert_eq!(stats.character_count_no_spaces, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.paragraph_count, 0);
        assert!(stats.reading_time_minutes.abs() < f64::EPSILON);
        assert!(stats.most_common_words.is_empty());
    }

    #[test]
    fn test_analyze_whitespace_only() {
        let stats = TextAnalyzer::new().analyze("   \n\t   ");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.character_count, 8);
        assert_eq!(stats.character_count_no_spaces, 0);
    }

    #[test]
    fn test_analyze_simple_text() {
        let text = "Hello world. This is a test.";
        let stats = TextAnalyzer::new().analyze(text);

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.character_count, text.len());
        assert_eq!(stats.character_count_no_spaces, text.replace(' ', "").len());
        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.paragraph_count, 1);
        assert!((stats.reading_time_minutes - 6.0 / 200.0).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_multiple_paragraphs() {
        let stats =
            TextAnalyzer::new().analyze("First paragraph.\n\nSecond paragraph with more content.");
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.sentence_count, 2);
    }

    #[test]
    fn test_punctuation_handling() {
        let stats = TextAnalyzer::new().analyze("Hello, world! How are you? I'm fine.");
        // "I'm" splits into "i" and "m".
        assert_eq!(stats.word_count, 8);
        assert_eq!(stats.sentence_count, 3);
    }

    #[test]
    fn test_words_lowercased_without_punctuation() {
        assert_eq!(
            words("Hello, world! How are you?"),
            vec!["hello", "world", "how", "are", "you"]
        );
    }

    #[test]
    fn test_count_sentences() {
        assert_eq!(count_sentences("First sentence. Second sentence! Third sentence?"), 3);
        assert_eq!(count_sentences("Wait... what?!"), 2);
    }

    #[test]
    fn test_count_paragraphs() {
        assert_eq!(
            count_paragraphs("First paragraph.\n\nSecond paragraph.\n\n\nThird paragraph."),
            3
        );
    }

    #[test]
    fn test_most_common_words() {
        let stats = TextAnalyzer::new()
            .analyze("The quick brown fox jumps over the lazy dog. The fox is quick.");
        let common: Vec<&str> = stats
            .most_common_words
            .iter()
            .map(|(word, _)| word.as_str())
            .collect();

        assert_eq!(common[..2], ["quick", "fox"]);
        assert!(!common.contains(&"the"));
        assert!(!common.contains(&"is"));
    }

    #[test]
    fn test_most_common_words_limit() {
        let text = (0..15)
            .map(|i| format!("word{i} word{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let stats = TextAnalyzer::new().analyze(&text);
        assert_eq!(stats.most_common_words.len(), 10);

        let stats = TextAnalyzer::new()
            .with_common_words_limit(3)
            .analyze(&text);
        assert_eq!(stats.most_common_words.len(), 3);
        assert_eq!(stats.most_common_words[0], ("word0".to_string(), 2));
    }

    #[test]
    fn test_word_frequency() {
        let freq = TextAnalyzer::new().word_frequency("hello world hello");
        assert_eq!(freq["hello"], 2);
        assert_eq!(freq["world"], 1);
    }

    #[test]
    fn test_reading_level_easy() {
        assert_eq!(
            TextAnalyzer::new().reading_level("The cat sat. It was fun."),
            ReadingLevel::Easy
        );
    }

    #[test]
    fn test_reading_level_hard() {
        let text = "The sophisticated methodology employed in this research demonstrates \
                    comprehensive analytical capabilities.";
        assert_eq!(TextAnalyzer::new().reading_level(text), ReadingLevel::Hard);
    }

    #[test]
    fn test_reading_level_empty() {
        assert_eq!(TextAnalyzer::new().reading_level(""), ReadingLevel::Unknown);
    }

    #[test]
    fn test_reading_time() {
        let text = "word ".repeat(200);
        let stats = TextAnalyzer::new().analyze(&text);
        assert!((stats.reading_time_minutes - 1.0).abs() < f64::EPSILON);

        let stats = TextAnalyzer::new().with_words_per_minute(100).analyze(&text);
        assert!((stats.reading_time_minutes - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unicode_words() {
        let text = "Hello 世界! @#$%^&*()";
        let stats = TextAnalyzer::new().analyze(text);
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.character_count, text.chars().count());
    }

    #[test]
    fn test_reading_level_display() {
        assert_eq!(ReadingLevel::Medium.to_string(), "Medium");
    }
}
