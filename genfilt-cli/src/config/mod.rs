//! Configuration module
//!
//! The configuration file is the TOML form of [`FilterConfig`]; every key is
//! optional and unknown keys are rejected:
//!
//! ```toml
//! progress_interval = 10000
//! repetition_factor = 2
//! max_line_chars = 1000
//!
//! [resources]
//! german_dictionary = "DE_morph_dict.txt"
//! russian_lexicon = "ru.tsv"
//! ```

use crate::error::CliError;
use genfilt_core::{FilterConfig, FilterError};
use std::path::Path;

/// Load and validate `path` if given, otherwise use defaults
pub fn load(path: Option<&Path>) -> Result<FilterConfig, CliError> {
    match path {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            FilterConfig::from_file(path).map_err(config_error)
        }
        None => Ok(FilterConfig::default()),
    }
}

/// Parse and validate a TOML document
pub fn from_toml_str(content: &str) -> Result<FilterConfig, CliError> {
    FilterConfig::from_toml_str(content).map_err(config_error)
}

fn config_error(error: FilterError) -> CliError {
    match error {
        FilterError::Config(msg) => CliError::ConfigError(msg),
        other => CliError::ConfigError(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genfilt_core::config::defaults;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(from_toml_str("").unwrap(), FilterConfig::default());
    }

    #[test]
    fn test_full_config() {
        let content = r#"
progress_interval = 500
repetition_factor = 3

[resources]
german_dictionary = "dicts/DE_morph_dict.txt"
italian_lexicon = "it.tsv"
"#;
        let config = from_toml_str(content).unwrap();
        assert_eq!(config.progress_interval, 500);
        assert_eq!(config.repetition_factor, 3);
        assert_eq!(config.max_line_chars, defaults::MAX_LINE_CHARS);
        assert_eq!(
            config.resources.german_dictionary,
            Some(PathBuf::from("dicts/DE_morph_dict.txt"))
        );
        assert_eq!(config.resources.italian_lexicon, Some(PathBuf::from("it.tsv")));
        assert!(config.resources.russian_lexicon.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = from_toml_str("progress_interval = 0\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: progress_interval must be greater than 0"
        );
    }

    #[test]
    fn test_misspelled_key_rejected() {
        let err = from_toml_str("max_line_char = 12\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
        assert!(err.to_string().contains("max_line_char"));
    }

    #[test]
    fn test_unknown_table_rejected() {
        let err = from_toml_str("[filter]\nmax_line_chars = 12\n").unwrap_err();
        assert!(err.to_string().contains("filter"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = from_toml_str("[resources\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_line_chars = 80").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.max_line_chars, 80);
        assert_eq!(config.progress_interval, defaults::PROGRESS_INTERVAL);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Some(Path::new("/nonexistent/genfilt.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/genfilt.toml"));
    }

    #[test]
    fn test_load_without_path() {
        let config = load(None).unwrap();
        assert_eq!(config.repetition_factor, defaults::REPETITION_FACTOR);
    }
}
