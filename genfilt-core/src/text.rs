//! Text helpers shared by the classifiers and drivers

use regex::Regex;
use std::sync::OnceLock;

/// Separator pattern for [`word_tokenize`]: anything that is not a word
/// character or hyphen, plus `+`
static SEPARATOR: OnceLock<Regex> = OnceLock::new();

fn separator() -> &'static Regex {
    SEPARATOR.get_or_init(|| Regex::new(r"[^\w-]|\+").expect("separator pattern is valid"))
}

/// Remove ASCII punctuation, leaving every other character intact
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_ascii_punctuation()).collect()
}

/// Number of whitespace-separated tokens
pub fn whitespace_token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into words and single-character separators
///
/// Runs of word characters (letters, digits, `_`, `-`) form one token; every
/// other non-space character, and `+`, is a token of its own. Whitespace is
/// dropped.
pub fn word_tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for sep in separator().find_iter(text) {
        tokens.push(&text[last..sep.start()]);
        tokens.push(sep.as_str());
        last = sep.end();
    }
    tokens.push(&text[last..]);
    tokens.retain(|token| !token.is_empty() && !token.chars().all(char::is_whitespace));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("Mr. Smith, (again)!"), "Mr Smith again");
        assert_eq!(strip_punctuation("l'école"), "lécole");
        // only ASCII punctuation is removed
        assert_eq!(strip_punctuation("«Frau»…"), "«Frau»…");
    }

    #[test]
    fn test_whitespace_token_count() {
        assert_eq!(whitespace_token_count(""), 0);
        assert_eq!(whitespace_token_count("  \n"), 0);
        assert_eq!(whitespace_token_count("die frau\tgeht\n"), 3);
    }

    #[test]
    fn test_word_tokenize_keeps_separators() {
        assert_eq!(
            word_tokenize("Она пришла, и ушла."),
            vec!["Она", "пришла", ",", "и", "ушла", "."]
        );
    }

    #[test]
    fn test_word_tokenize_hyphen_and_plus() {
        assert_eq!(word_tokenize("из-за a+b"), vec!["из-за", "a", "+", "b"]);
        assert_eq!(word_tokenize("snake_case"), vec!["snake_case"]);
    }

    #[test]
    fn test_word_tokenize_empty() {
        assert!(word_tokenize("").is_empty());
        assert!(word_tokenize("   \n").is_empty());
    }
}
