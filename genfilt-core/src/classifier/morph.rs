//! Morphological analyzer classifier
//!
//! Used for Russian. Every token from [`word_tokenize`] is analyzed and the
//! gender grammeme of its best-ranked parse is taken. Tokens are not
//! deduplicated.

use super::WordGenderClassifier;
use crate::error::{FilterError, Result};
use crate::labels::{GenderLabel, LabelTable};
use crate::text::word_tokenize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// OpenCorpora gender grammemes
const GENDER_GRAMMEMES: &[&str] = &["masc", "femn", "neut", "ms-f"];

/// Grammeme set of one analysis, e.g. `NOUN,anim,femn sing,nomn`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpenCorporaTag {
    grammemes: Vec<String>,
}

impl OpenCorporaTag {
    /// Parse a comma- and/or space-separated grammeme list
    pub fn parse(tag: &str) -> Self {
        Self {
            grammemes: tag
                .split(|ch: char| ch == ',' || ch.is_whitespace())
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Gender grammeme, if the analysis has one
    pub fn gender(&self) -> Option<&str> {
        self.grammemes
            .iter()
            .map(String::as_str)
            .find(|g| GENDER_GRAMMEMES.contains(g))
    }
}

/// One analysis of a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphParse {
    /// Dictionary (lemma) form
    pub normal_form: String,
    /// Grammatical tag
    pub tag: OpenCorporaTag,
}

/// Word-level morphological analysis, best parse first
pub trait MorphAnalyzer: Send + Sync {
    /// All analyses of `word`, ranked best-first; empty when unknown
    fn parse(&self, word: &str) -> Vec<MorphParse>;
}

/// Analyzer backed by a tab-separated lexicon file
///
/// Each row is `<word>\t<lemma>\t<grammemes>`; a word may have several
/// rows, ranked by file order. Lookup is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    entries: HashMap<String, Vec<MorphParse>>,
}

impl LexiconAnalyzer {
    /// Build from lexicon rows, skipping malformed ones
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut entries: HashMap<String, Vec<MorphParse>> = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            let mut fields = line.trim_end().split('\t');
            let (Some(word), Some(lemma), Some(tag)) = (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            if word.is_empty() {
                continue;
            }
            entries
                .entry(word.to_lowercase())
                .or_default()
                .push(MorphParse {
                    normal_form: lemma.to_string(),
                    tag: OpenCorporaTag::parse(tag),
                });
        }
        Ok(Self { entries })
    }

    /// Load from a lexicon file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| FilterError::resource_load(path, e))?;
        let analyzer = Self::from_reader(BufReader::new(file))
            .map_err(|e| FilterError::resource_load(path, e))?;
        log::info!(
            "Finished reading morphological lexicon from {} ({} word forms)",
            path.display(),
            analyzer.len()
        );
        Ok(analyzer)
    }

    /// Number of distinct word forms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MorphAnalyzer for LexiconAnalyzer {
    fn parse(&self, word: &str) -> Vec<MorphParse> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

/// Gender of the best-ranked analysis of each token
#[derive(Debug, Clone)]
pub struct MorphClassifier<A = LexiconAnalyzer> {
    analyzer: A,
    labels: LabelTable,
}

impl<A: MorphAnalyzer> MorphClassifier<A> {
    /// Create a classifier over an analyzer, registering `femn`/`masc`
    pub fn new(analyzer: A) -> Result<Self> {
        Ok(Self {
            analyzer,
            labels: LabelTable::base().with_synonyms("femn", "masc")?,
        })
    }
}

impl<A: MorphAnalyzer> WordGenderClassifier for MorphClassifier<A> {
    fn classify(&self, sentence: &str) -> Vec<String> {
        word_tokenize(sentence)
            .into_iter()
            .map(|token| {
                self.analyzer
                    .parse(token)
                    .first()
                    .and_then(|parse| parse.tag.gender())
                    .unwrap_or(GenderLabel::Other.as_str())
                    .to_string()
            })
            .collect()
    }

    fn labels(&self) -> &LabelTable {
        &self.labels
    }

    fn name(&self) -> &'static str {
        "morph-analyzer"
    }
}
