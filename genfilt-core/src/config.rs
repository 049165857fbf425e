//! Filter configuration
//!
//! All fields have defaults, so an empty TOML document is a valid
//! configuration. Unknown keys are rejected. Resource paths are passed to classifier constructors
//! explicitly; nothing is looked up from the environment here.

use crate::error::{FilterError, Result};
use crate::language::TargetLanguage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration constants
pub mod defaults {
    /// Lines between progress reports
    pub const PROGRESS_INTERVAL: u64 = 10_000;

    /// Target lines with more than `source tokens * factor` tokens are dropped
    pub const REPETITION_FACTOR: usize = 2;

    /// Source-filter lines longer than this (in characters) are skipped
    pub const MAX_LINE_CHARS: usize = 1000;
}

/// Runtime settings for both drivers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Lines between progress reports
    pub progress_interval: u64,

    /// Token ratio above which a target line counts as degenerate repetition
    pub repetition_factor: usize,

    /// Character limit for source-filter lines
    pub max_line_chars: usize,

    /// External resource locations
    pub resources: ResourceConfig,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            progress_interval: defaults::PROGRESS_INTERVAL,
            repetition_factor: defaults::REPETITION_FACTOR,
            max_line_chars: defaults::MAX_LINE_CHARS,
            resources: ResourceConfig::default(),
        }
    }
}

impl FilterConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FilterConfig =
            toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(FilterError::Config(
                "progress_interval must be greater than 0".into(),
            ));
        }
        if self.repetition_factor == 0 {
            return Err(FilterError::Config(
                "repetition_factor must be greater than 0".into(),
            ));
        }
        if self.max_line_chars == 0 {
            return Err(FilterError::Config(
                "max_line_chars must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Paths of the external resources each classifier loads at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceConfig {
    /// German noun dictionary (`<word> <tag1,tag2,...>` per line)
    pub german_dictionary: Option<PathBuf>,

    /// Russian morphological lexicon (`<word>\t<lemma>\t<grammemes>`)
    pub russian_lexicon: Option<PathBuf>,

    /// French tagger lexicon (`<form>\t<tag>`)
    pub french_lexicon: Option<PathBuf>,

    /// Italian tagger lexicon (`<form>\t<tag>`)
    pub italian_lexicon: Option<PathBuf>,
}

impl ResourceConfig {
    /// Resource path for a language, if the language needs one
    pub fn path_for(&self, language: TargetLanguage) -> Option<&Path> {
        match language {
            TargetLanguage::German => self.german_dictionary.as_deref(),
            TargetLanguage::Russian => self.russian_lexicon.as_deref(),
            TargetLanguage::French => self.french_lexicon.as_deref(),
            TargetLanguage::Italian => self.italian_lexicon.as_deref(),
            TargetLanguage::Hebrew => None,
        }
    }

    /// Set the resource path for a language; Hebrew needs none and is ignored
    pub fn set_path(&mut self, language: TargetLanguage, path: PathBuf) {
        match language {
            TargetLanguage::German => self.german_dictionary = Some(path),
            TargetLanguage::Russian => self.russian_lexicon = Some(path),
            TargetLanguage::French => self.french_lexicon = Some(path),
            TargetLanguage::Italian => self.italian_lexicon = Some(path),
            TargetLanguage::Hebrew => {}
        }
    }

    /// Resolve a required resource, failing fast when it is not configured
    pub fn require(&self, language: TargetLanguage, resource: &'static str) -> Result<&Path> {
        self.path_for(language)
            .ok_or_else(|| FilterError::MissingResource {
                language: language.code().to_string(),
                resource,
            })
    }
}
