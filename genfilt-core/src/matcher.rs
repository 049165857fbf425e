//! Sentence-level gender aggregation
//!
//! A sentence matches a requested gender when at least one word carries that
//! gender and no word carries the opposite one. A single opposite-gender word
//! vetoes the sentence wherever it appears.

use crate::classifier::WordGenderClassifier;
use crate::labels::{Gender, LabelTable, LabelVerdict};

/// Decide a sentence-level verdict from raw per-word labels
pub fn aggregate<'a, I>(labels: &LabelTable, gender: Gender, raw_labels: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let mut has_match = false;
    for raw in raw_labels {
        match labels.verdict(gender, raw) {
            LabelVerdict::Opposes => return false,
            LabelVerdict::Matches => has_match = true,
            LabelVerdict::Neutral => {}
        }
    }
    has_match
}

/// Combines a classifier with its label table
pub struct GenderMatcher<C> {
    classifier: C,
}

impl<C: WordGenderClassifier> GenderMatcher<C> {
    /// Create a matcher over a classifier
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Whether `sentence` exhibits exactly the requested gender
    pub fn matches_gender(&self, sentence: &str, gender: Gender) -> bool {
        let raw_labels = self.classifier.classify(sentence);
        aggregate(
            self.classifier.labels(),
            gender,
            raw_labels.iter().map(String::as_str),
        )
    }

    /// The wrapped classifier
    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}
