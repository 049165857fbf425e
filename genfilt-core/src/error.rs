//! Error types for gender filtering
//!
//! Configuration and resource errors fail fast at startup. Per-line anomalies
//! (overlong lines, sentences without gendered words, ambiguous dictionary
//! entries) never surface here; they resolve to a label or a dropped line.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building classifiers or running a filter
#[derive(Debug, Error)]
pub enum FilterError {
    /// Target language code outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Gender code outside the supported set
    #[error("Unsupported gender: {0}")]
    UnsupportedGender(String),

    /// UD feature tagging was requested for a language it does not cover
    #[error("Morphological tagging is only supported for fr and it, got {0}")]
    UnsupportedTaggerLanguage(String),

    /// A raw label would land in both the matching and opposing set
    #[error("Label '{label}' cannot both match and oppose gender {gender}")]
    LabelConflict {
        /// Requested gender code whose sets would overlap
        gender: String,
        /// The offending raw label
        label: String,
    },

    /// A classifier needs a resource path that was not configured
    #[error("Missing {resource} for language {language}")]
    MissingResource {
        /// Target language code
        language: String,
        /// Human-readable resource name
        resource: &'static str,
    },

    /// A resource file could not be opened or read
    #[error("Failed to load resource {}: {source}", path.display())]
    ResourceLoad {
        /// Path of the resource file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A corpus file could not be opened or created
    #[error("Failed to open {}: {source}", path.display())]
    FileOpen {
        /// Path of the corpus file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Configuration parsing or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stream read/write failure during a run
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FilterError {
    pub(crate) fn resource_load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilterError::ResourceLoad {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilterError::FileOpen {
            path: path.into(),
            source,
        }
    }
}

/// Result type for filtering operations
pub type Result<T> = std::result::Result<T, FilterError>;
