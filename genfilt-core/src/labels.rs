//! Gender labels and per-analyzer label tables
//!
//! Every classifier emits raw labels in its own vocabulary (`femn`, `Fem`,
//! ...). A [`LabelTable`] maps those raw labels onto the abstract
//! feminine/masculine model for one requested gender at a time, so the
//! aggregator never needs to know an analyzer's vocabulary.

use crate::error::{FilterError, Result};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Word- or sentence-level gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderLabel {
    /// Feminine
    Feminine,
    /// Masculine
    Masculine,
    /// No gender detected, mixed, or unsupported gender
    Other,
}

impl GenderLabel {
    /// Raw label emitted by classifiers that speak the base vocabulary
    pub const fn as_str(self) -> &'static str {
        match self {
            GenderLabel::Feminine => "fem",
            GenderLabel::Masculine => "msc",
            GenderLabel::Other => "other",
        }
    }
}

impl fmt::Display for GenderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender a filter run can be asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Feminine
    Feminine,
    /// Masculine
    Masculine,
}

impl Gender {
    /// All requestable genders
    pub const ALL: [Gender; 2] = [Gender::Feminine, Gender::Masculine];

    /// Short code used on the command line and in output file suffixes
    pub const fn code(self) -> &'static str {
        self.label().as_str()
    }

    /// Parse a gender code (`fem` or `msc`)
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "fem" => Ok(Gender::Feminine),
            "msc" => Ok(Gender::Masculine),
            other => Err(FilterError::UnsupportedGender(other.to_string())),
        }
    }

    /// Corresponding word-level label
    pub const fn label(self) -> GenderLabel {
        match self {
            Gender::Feminine => GenderLabel::Feminine,
            Gender::Masculine => GenderLabel::Masculine,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        Gender::from_code(s)
    }
}

/// How a raw label relates to a requested gender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelVerdict {
    /// The word carries the requested gender
    Matches,
    /// The word carries the opposite gender
    Opposes,
    /// The label says nothing about the requested gender
    Neutral,
}

#[derive(Debug, Clone, Default)]
struct LabelSets {
    matching: HashSet<String>,
    opposing: HashSet<String>,
}

/// Matching and opposing raw-label sets for each requested gender
///
/// For every gender the two sets are disjoint; [`LabelTable::register`]
/// refuses any label that would break this.
#[derive(Debug, Clone)]
pub struct LabelTable {
    feminine: LabelSets,
    masculine: LabelSets,
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::base()
    }
}

impl LabelTable {
    /// Table holding only the base `fem`/`msc` vocabulary
    pub fn base() -> Self {
        let mut table = Self {
            feminine: LabelSets::default(),
            masculine: LabelSets::default(),
        };
        table.insert_pair(GenderLabel::Feminine.as_str(), GenderLabel::Masculine.as_str());
        table
    }

    /// Register an analyzer's feminine and masculine labels
    ///
    /// The feminine label matches [`Gender::Feminine`] and opposes
    /// [`Gender::Masculine`]; the masculine label does the reverse.
    pub fn register(&mut self, feminine: &str, masculine: &str) -> Result<()> {
        self.check_free(Gender::Feminine, feminine, masculine)?;
        self.check_free(Gender::Masculine, masculine, feminine)?;
        self.insert_pair(feminine, masculine);
        Ok(())
    }

    /// Builder-style [`LabelTable::register`]
    pub fn with_synonyms(mut self, feminine: &str, masculine: &str) -> Result<Self> {
        self.register(feminine, masculine)?;
        Ok(self)
    }

    /// Classify a raw label against a requested gender
    pub fn verdict(&self, gender: Gender, raw: &str) -> LabelVerdict {
        let sets = self.sets(gender);
        if sets.opposing.contains(raw) {
            LabelVerdict::Opposes
        } else if sets.matching.contains(raw) {
            LabelVerdict::Matches
        } else {
            LabelVerdict::Neutral
        }
    }

    /// Raw labels that count as the requested gender
    pub fn matching(&self, gender: Gender) -> impl Iterator<Item = &str> {
        self.sets(gender).matching.iter().map(String::as_str)
    }

    /// Raw labels that count as the opposite gender
    pub fn opposing(&self, gender: Gender) -> impl Iterator<Item = &str> {
        self.sets(gender).opposing.iter().map(String::as_str)
    }

    fn sets(&self, gender: Gender) -> &LabelSets {
        match gender {
            Gender::Feminine => &self.feminine,
            Gender::Masculine => &self.masculine,
        }
    }

    fn check_free(&self, gender: Gender, matching: &str, opposing: &str) -> Result<()> {
        let sets = self.sets(gender);
        let conflict = if sets.opposing.contains(matching) || matching == opposing {
            Some(matching)
        } else if sets.matching.contains(opposing) {
            Some(opposing)
        } else {
            None
        };
        match conflict {
            Some(label) => Err(FilterError::LabelConflict {
                gender: gender.code().to_string(),
                label: label.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn insert_pair(&mut self, feminine: &str, masculine: &str) {
        self.feminine.matching.insert(feminine.to_string());
        self.feminine.opposing.insert(masculine.to_string());
        self.masculine.matching.insert(masculine.to_string());
        self.masculine.opposing.insert(feminine.to_string());
    }
}
