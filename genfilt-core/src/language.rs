//! Supported target languages

use crate::error::{FilterError, Result};
use std::fmt;
use std::str::FromStr;

/// Target languages with a word-gender classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    /// German, dictionary lookup
    German,
    /// French, UD morphological features
    French,
    /// Hebrew, final-character heuristic
    Hebrew,
    /// Italian, UD morphological features
    Italian,
    /// Russian, morphological analyzer
    Russian,
}

impl TargetLanguage {
    /// All supported languages, ordered by code
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::German,
        TargetLanguage::French,
        TargetLanguage::Hebrew,
        TargetLanguage::Italian,
        TargetLanguage::Russian,
    ];

    /// Create a language from its two-letter code
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_lowercase().as_str() {
            "de" => Ok(TargetLanguage::German),
            "fr" => Ok(TargetLanguage::French),
            "he" => Ok(TargetLanguage::Hebrew),
            "it" => Ok(TargetLanguage::Italian),
            "ru" => Ok(TargetLanguage::Russian),
            _ => Err(FilterError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Get the two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::German => "de",
            TargetLanguage::French => "fr",
            TargetLanguage::Hebrew => "he",
            TargetLanguage::Italian => "it",
            TargetLanguage::Russian => "ru",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::German => "German",
            TargetLanguage::French => "French",
            TargetLanguage::Hebrew => "Hebrew",
            TargetLanguage::Italian => "Italian",
            TargetLanguage::Russian => "Russian",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TargetLanguage {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        TargetLanguage::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for language in TargetLanguage::ALL {
            assert_eq!(TargetLanguage::from_code(language.code()).unwrap(), language);
        }
    }

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(TargetLanguage::from_code("DE").unwrap(), TargetLanguage::German);
        assert_eq!("Ru".parse::<TargetLanguage>().unwrap(), TargetLanguage::Russian);
    }

    #[test]
    fn test_unsupported_code() {
        match TargetLanguage::from_code("es") {
            Err(FilterError::UnsupportedLanguage(code)) => assert_eq!(code, "es"),
            other => panic!("Expected UnsupportedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(TargetLanguage::Hebrew.to_string(), "Hebrew");
    }
}
