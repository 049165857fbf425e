//! Word-level gender classifiers
//!
//! Each supported target language has one strategy that turns a raw
//! sentence into one raw gender label per word. The strategies share nothing
//! beyond the [`WordGenderClassifier`] contract:
//!
//! - [`DictionaryClassifier`]: noun dictionary lookup (German)
//! - [`SuffixClassifier`]: final-character heuristic (Hebrew)
//! - [`MorphClassifier`]: top-ranked morphological analysis (Russian)
//! - [`UdClassifier`]: UD morphological features from a tagger (French, Italian)
//!
//! Every classifier builds its own [`LabelTable`] at construction, extending
//! the base `fem`/`msc` vocabulary with whatever its analyzer emits.

mod dictionary;
mod morph;
mod suffix;
mod ud;

pub use dictionary::{DictionaryClassifier, GenderDict};
pub use morph::{LexiconAnalyzer, MorphAnalyzer, MorphClassifier, MorphParse, OpenCorporaTag};
pub use suffix::SuffixClassifier;
pub use ud::{parse_morphology, LexiconTagger, MorphTagger, TaggedToken, UdClassifier};

use crate::config::ResourceConfig;
use crate::error::Result;
use crate::labels::LabelTable;
use crate::language::TargetLanguage;

/// Maps a sentence to raw per-word gender labels
pub trait WordGenderClassifier: Send + Sync {
    /// Raw gender label for each distinguishable word of `sentence`
    ///
    /// Labels are in the classifier's own vocabulary; interpret them through
    /// [`WordGenderClassifier::labels`].
    fn classify(&self, sentence: &str) -> Vec<String>;

    /// Label table covering this classifier's vocabulary
    fn labels(&self) -> &LabelTable;

    /// Short human-readable name of the strategy
    fn name(&self) -> &'static str;
}

impl<C: WordGenderClassifier + ?Sized> WordGenderClassifier for Box<C> {
    fn classify(&self, sentence: &str) -> Vec<String> {
        (**self).classify(sentence)
    }

    fn labels(&self) -> &LabelTable {
        (**self).labels()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Build the classifier for a target language, loading its resources
pub fn classifier_for(
    language: TargetLanguage,
    resources: &ResourceConfig,
) -> Result<Box<dyn WordGenderClassifier>> {
    let classifier: Box<dyn WordGenderClassifier> = match language {
        TargetLanguage::German => {
            let path = resources.require(language, "German dictionary")?;
            Box::new(DictionaryClassifier::new(GenderDict::from_file(path)?))
        }
        TargetLanguage::Hebrew => Box::new(SuffixClassifier::hebrew()),
        TargetLanguage::Russian => {
            let path = resources.require(language, "Russian lexicon")?;
            Box::new(MorphClassifier::new(LexiconAnalyzer::from_file(path)?)?)
        }
        TargetLanguage::French | TargetLanguage::Italian => {
            let path = resources.require(language, "tagger lexicon")?;
            Box::new(UdClassifier::new(language, LexiconTagger::from_file(path)?)?)
        }
    };
    log::debug!(
        "Using {} classifier for {}",
        classifier.name(),
        language.name()
    );
    Ok(classifier)
}
