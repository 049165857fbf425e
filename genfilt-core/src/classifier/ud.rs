//! UD morphological feature classifier
//!
//! Used for French and Italian. A tagger assigns each token a fine-grained
//! tag of the form `POS__Feat=Val|Feat=Val`; the `Gender` feature is the
//! word's raw label. Tagging covers morphology only, with no dependency
//! parse or entity recognition.

use super::WordGenderClassifier;
use crate::error::{FilterError, Result};
use crate::labels::{GenderLabel, LabelTable};
use crate::language::TargetLanguage;
use crate::text::word_tokenize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Tag given to tokens the lexicon does not know
const UNKNOWN_TAG: &str = "X";

/// A token and its fine-grained tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Surface form
    pub text: String,
    /// Fine-grained tag, e.g. `NOUN__Gender=Fem|Number=Sing`
    pub tag: String,
}

/// Sentence-level morphological tagging
pub trait MorphTagger: Send + Sync {
    /// Tokenize and tag a sentence
    fn tag(&self, sentence: &str) -> Vec<TaggedToken>;
}

/// Parse the feature part of a fine-grained tag into key/value pairs
///
/// Tags without a `__` feature part, or with the empty marker `_`, have no
/// features. Properties lacking `=` are ignored.
pub fn parse_morphology(tag: &str) -> HashMap<&str, &str> {
    let Some(features) = tag.split("__").nth(1) else {
        return HashMap::new();
    };
    if features == "_" {
        return HashMap::new();
    }
    features
        .split('|')
        .filter_map(|prop| prop.split_once('='))
        .collect()
}

/// Tagger backed by a tab-separated `<form>\t<tag>` lexicon
///
/// Lookup is case-insensitive and the first row for a form wins.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    forms: HashMap<String, String>,
}

impl LexiconTagger {
    /// Build from lexicon rows, skipping malformed ones
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut forms = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            let Some((form, tag)) = line.trim_end().split_once('\t') else {
                continue;
            };
            if form.is_empty() || tag.is_empty() {
                continue;
            }
            forms
                .entry(form.to_lowercase())
                .or_insert_with(|| tag.to_string());
        }
        Ok(Self { forms })
    }

    /// Load from a lexicon file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| FilterError::resource_load(path, e))?;
        let tagger = Self::from_reader(BufReader::new(file))
            .map_err(|e| FilterError::resource_load(path, e))?;
        log::info!(
            "Finished reading tagger lexicon from {} ({} forms)",
            path.display(),
            tagger.len()
        );
        Ok(tagger)
    }

    /// Number of distinct forms
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Whether the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl MorphTagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        word_tokenize(sentence)
            .into_iter()
            .map(|token| TaggedToken {
                text: token.to_string(),
                tag: self
                    .forms
                    .get(&token.to_lowercase())
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_TAG.to_string()),
            })
            .collect()
    }
}

/// Reads the `Gender` feature of every tagged token
#[derive(Debug, Clone)]
pub struct UdClassifier<T = LexiconTagger> {
    tagger: T,
    labels: LabelTable,
}

impl<T: MorphTagger> UdClassifier<T> {
    /// Create a classifier for French or Italian, registering `Fem`/`Masc`
    pub fn new(language: TargetLanguage, tagger: T) -> Result<Self> {
        if !matches!(language, TargetLanguage::French | TargetLanguage::Italian) {
            return Err(FilterError::UnsupportedTaggerLanguage(
                language.code().to_string(),
            ));
        }
        Ok(Self {
            tagger,
            labels: LabelTable::base().with_synonyms("Fem", "Masc")?,
        })
    }
}

impl<T: MorphTagger> WordGenderClassifier for UdClassifier<T> {
    fn classify(&self, sentence: &str) -> Vec<String> {
        self.tagger
            .tag(sentence)
            .iter()
            .map(|token| {
                parse_morphology(&token.tag)
                    .get("Gender")
                    .copied()
                    .unwrap_or(GenderLabel::Other.as_str())
                    .to_string()
            })
            .collect()
    }

    fn labels(&self) -> &LabelTable {
        &self.labels
    }

    fn name(&self) -> &'static str {
        "ud-tagger"
    }
}
