//! Noun dictionary classifier
//!
//! The dictionary is a flat file of `<word> <tag1,tag2,...>` rows, as in the
//! German morphological dictionaries. Only noun rows (`NN`) with a `fem` or
//! `masc` subtag are kept. A form that appears with both genders is dropped
//! rather than given a default.

use super::WordGenderClassifier;
use crate::error::{FilterError, Result};
use crate::labels::{GenderLabel, LabelTable};
use crate::text::strip_punctuation;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Immutable lowercase word form to gender mapping
#[derive(Debug, Clone, Default)]
pub struct GenderDict {
    entries: HashMap<String, GenderLabel>,
}

impl GenderDict {
    /// Build from dictionary rows
    ///
    /// Short or malformed rows are skipped silently.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut feminine = HashSet::new();
        let mut masculine = HashSet::new();

        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let (Some(word), Some(tag)) = (fields.next(), fields.next()) else {
                continue;
            };
            let subtags: Vec<&str> = tag.split(',').collect();
            if subtags.len() <= 2 || subtags[0] != "NN" {
                continue;
            }
            match subtags[1] {
                "fem" => {
                    feminine.insert(word.to_lowercase());
                }
                "masc" => {
                    masculine.insert(word.to_lowercase());
                }
                _ => {}
            }
        }

        let mut entries = HashMap::with_capacity(feminine.len() + masculine.len());
        for word in feminine.difference(&masculine) {
            entries.insert(word.clone(), GenderLabel::Feminine);
        }
        for word in masculine.difference(&feminine) {
            entries.insert(word.clone(), GenderLabel::Masculine);
        }

        Ok(Self { entries })
    }

    /// Load from a dictionary file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| FilterError::resource_load(path, e))?;
        let dict = Self::from_reader(BufReader::new(file))
            .map_err(|e| FilterError::resource_load(path, e))?;
        log::info!(
            "Finished reading gender dict from {} ({} entries)",
            path.display(),
            dict.len()
        );
        Ok(dict)
    }

    /// Build directly from word/gender pairs; words are lowercased
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, GenderLabel)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(word, label)| (word.to_lowercase(), label))
                .collect(),
        }
    }

    /// Gender of a lowercase word form; absent words are [`GenderLabel::Other`]
    pub fn get(&self, word: &str) -> GenderLabel {
        self.entries.get(word).copied().unwrap_or(GenderLabel::Other)
    }

    /// Number of unambiguous entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Dictionary lookup over the distinct lowercase words of a sentence
#[derive(Debug, Clone)]
pub struct DictionaryClassifier {
    dict: GenderDict,
    labels: LabelTable,
}

impl DictionaryClassifier {
    /// Create a classifier over a loaded dictionary
    pub fn new(dict: GenderDict) -> Self {
        Self {
            dict,
            labels: LabelTable::base(),
        }
    }
}

impl WordGenderClassifier for DictionaryClassifier {
    fn classify(&self, sentence: &str) -> Vec<String> {
        let cleaned = strip_punctuation(sentence).to_lowercase();
        let words: HashSet<&str> = cleaned.split_whitespace().collect();
        words
            .into_iter()
            .map(|word| self.dict.get(word).as_str().to_string())
            .collect()
    }

    fn labels(&self) -> &LabelTable {
        &self.labels
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
Frau NN,fem,nom,sg
Frauen NN,fem,nom,pl
Mann NN,masc,nom,sg
Haus NN,neut,nom,sg
See NN,masc,nom,sg
See NN,fem,nom,sg
schnell ADJ,pos,sg
Lehrer NN,masc
onlyoneword
";

    fn sample_dict() -> GenderDict {
        GenderDict::from_reader(Cursor::new(SAMPLE)).unwrap()
    }

    #[test]
    fn test_reads_noun_genders() {
        let dict = sample_dict();
        assert_eq!(dict.get("frau"), GenderLabel::Feminine);
        assert_eq!(dict.get("frauen"), GenderLabel::Feminine);
        assert_eq!(dict.get("mann"), GenderLabel::Masculine);
    }

    #[test]
    fn test_skips_other_rows() {
        let dict = sample_dict();
        // neuter, non-noun, too few subtags, single field
        assert_eq!(dict.get("haus"), GenderLabel::Other);
        assert_eq!(dict.get("schnell"), GenderLabel::Other);
        assert_eq!(dict.get("lehrer"), GenderLabel::Other);
        assert_eq!(dict.get("onlyoneword"), GenderLabel::Other);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_ambiguous_entries_dropped() {
        assert_eq!(sample_dict().get("see"), GenderLabel::Other);
    }

    #[test]
    fn test_lookup_is_lowercase() {
        let dict = sample_dict();
        assert_eq!(dict.get("Frau"), GenderLabel::Other);
    }

    #[test]
    fn test_classify_deduplicates_words() {
        let classifier = DictionaryClassifier::new(sample_dict());
        let labels = classifier.classify("Die Frau, die Frau!");
        let mut labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        labels.sort_unstable();
        assert_eq!(labels, vec!["fem", "other"]);
    }

    #[test]
    fn test_classify_strips_punctuation() {
        let classifier = DictionaryClassifier::new(sample_dict());
        assert_eq!(classifier.classify("(Mann)."), vec!["msc"]);
    }

    #[test]
    fn test_classify_empty_sentence() {
        let classifier = DictionaryClassifier::new(sample_dict());
        assert!(classifier.classify("  ...\n").is_empty());
    }

    #[test]
    fn test_from_entries() {
        let dict = GenderDict::from_entries([("Haus", GenderLabel::Masculine)]);
        assert_eq!(dict.get("haus"), GenderLabel::Masculine);
        assert!(!dict.is_empty());
    }
}
