//! Closed English gendered wordlists for source-side filtering
//!
//! The full lists follow the WinoBias generalized swaps and include the
//! pronouns. Entries with a trailing period can only match text that kept
//! its punctuation.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Feminine pronouns
pub const FEMININE_PRONOUNS: &[&str] = &["she", "her", "herself", "hers"];

/// Masculine pronouns
pub const MASCULINE_PRONOUNS: &[&str] = &["he", "him", "his", "himself"];

const FEMININE_NOUNS: &[&str] = &[
    "Ms", "Mrs", "Ms.", "Mrs.", "madam", "woman", "women", "actress", "actresses", "airwoman",
    "airwomen", "aunts", "aunt", "girl", "girls", "bride", "brides", "sister", "sisters",
    "businesswoman", "businesswomen", "chairwoman", "chairwomen", "chick", "chicks", "mom", "moms",
    "mommy", "mommies", "daughter", "daughters", "mother", "mothers", "female", "females", "gal",
    "gals", "lady", "ladies", "granddaughter", "granddaughters", "wife", "wives", "queen", "queens",
    "policewoman", "policewomen", "princess", "princesses", "spokeswoman", "spokeswomen",
];

const MASCULINE_NOUNS: &[&str] = &[
    "Mr.", "Mr", "sir", "man", "men", "actor", "actors", "uncle", "uncles", "boys", "boy", "groom",
    "grooms", "brother", "brothers", "businessman", "businessmen", "chairman", "chairmen", "dude",
    "dudes", "dad", "dads", "daddy", "daddies", "son", "sons", "father", "fathers", "male", "males",
    "guy", "guys", "gentleman", "gentlemen", "grandson", "grandsons", "husband", "husbands", "king",
    "kings", "lord", "lords", "policeman", "policemen", "princes", "spokesman", "spokesmen",
];

static FEMININE_PRONOUN_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static MASCULINE_PRONOUN_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static FEMININE_WORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static MASCULINE_WORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Feminine pronoun set
pub fn feminine_pronouns() -> &'static HashSet<&'static str> {
    FEMININE_PRONOUN_SET.get_or_init(|| FEMININE_PRONOUNS.iter().copied().collect())
}

/// Masculine pronoun set
pub fn masculine_pronouns() -> &'static HashSet<&'static str> {
    MASCULINE_PRONOUN_SET.get_or_init(|| MASCULINE_PRONOUNS.iter().copied().collect())
}

/// All feminine words, pronouns included
pub fn feminine_words() -> &'static HashSet<&'static str> {
    FEMININE_WORD_SET.get_or_init(|| {
        FEMININE_NOUNS
            .iter()
            .chain(FEMININE_PRONOUNS)
            .copied()
            .collect()
    })
}

/// All masculine words, pronouns included
pub fn masculine_words() -> &'static HashSet<&'static str> {
    MASCULINE_WORD_SET.get_or_init(|| {
        MASCULINE_NOUNS
            .iter()
            .chain(MASCULINE_PRONOUNS)
            .copied()
            .collect()
    })
}
