//! Grammatical-gender filtering for machine-translation corpora
//!
//! Two filters are provided:
//!
//! - **Target filtering** keeps the pairs of a parallel corpus whose target
//!   sentence unambiguously exhibits a requested grammatical gender, after
//!   dropping pairs whose target looks like degenerate repetition.
//! - **Source filtering** splits an English corpus into feminine-specific
//!   and masculine-specific lines using closed wordlists.
//!
//! Gender is decided per word by a language-specific
//! [`WordGenderClassifier`](classifier::WordGenderClassifier), and per
//! sentence by the [`GenderMatcher`](matcher::GenderMatcher): at least one
//! matching word and no opposing word.
//!
//! # Example
//!
//! ```rust
//! use genfilt_core::classifier::{DictionaryClassifier, GenderDict};
//! use genfilt_core::{Gender, GenderLabel, GenderMatcher};
//!
//! let dict = GenderDict::from_entries([
//!     ("frau", GenderLabel::Feminine),
//!     ("mann", GenderLabel::Masculine),
//! ]);
//! let matcher = GenderMatcher::new(DictionaryClassifier::new(dict));
//!
//! assert!(matcher.matches_gender("Die Frau geht.", Gender::Feminine));
//! assert!(!matcher.matches_gender("Der Mann und die Frau.", Gender::Feminine));
//! ```

#![warn(missing_docs)]

pub mod classifier;
pub mod config;
pub mod error;
pub mod filter;
pub mod labels;
pub mod language;
pub mod matcher;
pub mod text;
pub mod wordlists;

pub use classifier::{classifier_for, WordGenderClassifier};
pub use config::{FilterConfig, ResourceConfig};
pub use error::{FilterError, Result};
pub use filter::{
    FilterStats, ProgressFn, SourceFilter, SourcePaths, SourceStats, TargetFilter, TargetPaths,
};
pub use labels::{Gender, GenderLabel, LabelTable, LabelVerdict};
pub use language::TargetLanguage;
pub use matcher::GenderMatcher;
