//! Target command implementation

use super::{check_inputs, CommonArgs};
use crate::output::RunSummary;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use genfilt_core::{
    classifier_for, Gender, ResourceConfig, TargetFilter, TargetLanguage, TargetPaths,
};
use std::path::PathBuf;

/// Arguments for the target command
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Source side of the parallel corpus
    #[arg(short, long, value_name = "FILE")]
    pub source: PathBuf,

    /// Target side of the parallel corpus
    #[arg(short, long, value_name = "FILE")]
    pub target: PathBuf,

    /// Target language
    #[arg(short, long, value_enum)]
    pub language: Language,

    /// Gender to keep
    #[arg(short, long, value_enum)]
    pub gender: GenderArg,

    /// Source output (default: <SOURCE>.target_filtered)
    #[arg(long, value_name = "FILE")]
    pub source_output: Option<PathBuf>,

    /// Target output (default: <TARGET>.target_filtered)
    #[arg(long, value_name = "FILE")]
    pub target_output: Option<PathBuf>,

    /// German noun dictionary
    #[arg(long, value_name = "FILE", env = "GENFILT_GERMAN_DICT")]
    pub german_dict: Option<PathBuf>,

    /// Morphological lexicon for Russian, French or Italian
    #[arg(long, value_name = "FILE", env = "GENFILT_LEXICON")]
    pub lexicon: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Supported target languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    /// German
    De,
    /// French
    Fr,
    /// Hebrew
    He,
    /// Italian
    It,
    /// Russian
    Ru,
}

impl From<Language> for TargetLanguage {
    fn from(language: Language) -> Self {
        match language {
            Language::De => TargetLanguage::German,
            Language::Fr => TargetLanguage::French,
            Language::He => TargetLanguage::Hebrew,
            Language::It => TargetLanguage::Italian,
            Language::Ru => TargetLanguage::Russian,
        }
    }
}

/// Requestable genders
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GenderArg {
    /// Feminine
    Fem,
    /// Masculine
    Msc,
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Fem => Gender::Feminine,
            GenderArg::Msc => Gender::Masculine,
        }
    }
}

impl TargetArgs {
    /// Execute the target command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let language = TargetLanguage::from(self.language);
        let gender = Gender::from(self.gender);

        check_inputs(&[self.source.as_path(), self.target.as_path()])?;
        let mut config = self.common.load_config()?;
        for flag in self.apply_resource_flags(language, &mut config.resources) {
            log::warn!("{} does not apply to {} and is ignored", flag, language.name());
        }

        let classifier = classifier_for(language, &config.resources)
            .with_context(|| format!("Failed to set up the {} classifier", language.name()))?;

        let paths = TargetPaths::new(&self.source, &self.target)
            .with_outputs(self.source_output.clone(), self.target_output.clone());

        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.start(&self.target.display().to_string());
        let mut filter = TargetFilter::new(classifier, config);
        if let Some(callback) = progress.callback() {
            filter = filter.with_progress(callback);
        }

        let stats = filter.filter_files(&paths, gender).with_context(|| {
            format!(
                "Failed to filter {} / {}",
                paths.source_input.display(),
                paths.target_input.display()
            )
        })?;
        progress.finish(stats.total);

        self.common.print_summary(&RunSummary::Target {
            language: language.code().to_string(),
            gender: gender.code().to_string(),
            source_output: paths.source_output,
            target_output: paths.target_output,
            stats,
        })
    }
}

impl TargetArgs {
    /// Override configured resource paths from flags
    ///
    /// Returns the flags that were given but do not apply to `language`.
    fn apply_resource_flags(
        &self,
        language: TargetLanguage,
        resources: &mut ResourceConfig,
    ) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if let Some(path) = &self.german_dict {
            if language == TargetLanguage::German {
                resources.set_path(language, path.clone());
            } else {
                ignored.push("--german-dict");
            }
        }
        if let Some(path) = &self.lexicon {
            match language {
                TargetLanguage::French | TargetLanguage::Italian | TargetLanguage::Russian => {
                    resources.set_path(language, path.clone());
                }
                TargetLanguage::German | TargetLanguage::Hebrew => ignored.push("--lexicon"),
            }
        }
        ignored
    }
}
