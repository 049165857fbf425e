//! Final-character gender heuristic
//!
//! Follows the WinoMT heuristic for Hebrew: a word ending in one of the
//! feminine characters is feminine, one ending in a masculine character is
//! masculine. Tokens are whitespace-delimited and keep attached punctuation.

use super::WordGenderClassifier;
use crate::labels::{GenderLabel, LabelTable};
use std::collections::HashSet;

const HEBREW_FEMININE: &[char] = &['ת', 'ה'];
const HEBREW_MASCULINE: &[char] = &['ק', 'ד', 'ר', 'ש', 'ט', 'ב', 'א', 'ך', 'ל', 'ס'];
/// Accusative marker; ends in a feminine character but carries no gender
const HEBREW_EXCEPTIONS: &[&str] = &["את"];

/// Classifies distinct tokens by their last character
#[derive(Debug, Clone)]
pub struct SuffixClassifier {
    feminine: HashSet<char>,
    masculine: HashSet<char>,
    exceptions: HashSet<String>,
    labels: LabelTable,
}

impl SuffixClassifier {
    /// Create a classifier from suffix character sets and exception tokens
    pub fn new(feminine: &[char], masculine: &[char], exceptions: &[&str]) -> Self {
        Self {
            feminine: feminine.iter().copied().collect(),
            masculine: masculine.iter().copied().collect(),
            exceptions: exceptions.iter().map(|s| s.to_string()).collect(),
            labels: LabelTable::base(),
        }
    }

    /// Hebrew character sets
    pub fn hebrew() -> Self {
        Self::new(HEBREW_FEMININE, HEBREW_MASCULINE, HEBREW_EXCEPTIONS)
    }

    fn word_gender(&self, word: &str) -> GenderLabel {
        if self.exceptions.contains(word) {
            return GenderLabel::Other;
        }
        match word.chars().last() {
            Some(ch) if self.feminine.contains(&ch) => GenderLabel::Feminine,
            Some(ch) if self.masculine.contains(&ch) => GenderLabel::Masculine,
            _ => GenderLabel::Other,
        }
    }
}

impl WordGenderClassifier for SuffixClassifier {
    fn classify(&self, sentence: &str) -> Vec<String> {
        let tokens: HashSet<&str> = sentence.split_whitespace().collect();
        tokens
            .into_iter()
            .map(|token| self.word_gender(token).as_str().to_string())
            .collect()
    }

    fn labels(&self) -> &LabelTable {
        &self.labels
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}
