//! End-to-end correction run.
//!
//! Reference tables → dictionary → (per subject table) correction →
//! classification → styled output table.

use std::path::PathBuf;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{RunConfig, SubjectConfig};
use crate::correction::classify::{CellClassifier, ColumnSummary};
use crate::correction::table_corrector::TableCorrector;
use crate::error::Result;
use crate::spelling::corrector::SpellingCorrector;
use crate::spelling::dictionary::{DictionaryBuilder, ReferenceDictionary};
use crate::table::{StyledTable, read_table, write_table};

/// Result of correcting one subject table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    /// Fields kept as-is by the confidence re-check.
    pub rollbacks: usize,
    pub columns: Vec<ColumnSummary>,
}

/// Result of a full run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub dictionary_file: PathBuf,
    pub dictionary_words: usize,
    pub subjects: Vec<SubjectReport>,
}

/// Drives a run described by a [`RunConfig`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: RunConfig,
}

impl Pipeline {
    /// Create a pipeline, validating the configuration.
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Pipeline { config })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Build the dictionary from the reference corpus and the original-name tables.
    pub fn build_dictionary(&self) -> Result<ReferenceDictionary> {
        let mut builder = DictionaryBuilder::new();

        let reference = read_table(&self.config.reference_file)?;
        for column in &self.config.reference_columns {
            builder.add_column(&reference, column)?;
        }

        for path in &self.config.original_name_files {
            let names = read_table(path)?;
            builder.add_column(&names, &self.config.original_name_column)?;
        }

        let raw_tokens = builder.raw_token_count();
        let dictionary = builder.build();
        info!(
            "Built dictionary of {} words from {} distinct tokens",
            dictionary.len(),
            raw_tokens
        );
        Ok(dictionary)
    }

    /// Save the dictionary as a single-column table.
    pub fn save_dictionary(&self, dictionary: &ReferenceDictionary) -> Result<PathBuf> {
        let path = &self.config.output_dictionary_file;
        let table = dictionary.to_table("dictionary", &self.config.dictionary_column);
        write_table(&StyledTable::new(table), path)?;

        info!("Saved dictionary to {}", path.display());
        Ok(path.clone())
    }

    /// Correct, classify and save one subject table.
    pub fn process_subject(
        &self,
        subject: &SubjectConfig,
        dictionary: &ReferenceDictionary,
    ) -> Result<SubjectReport> {
        let table = read_table(&subject.input)?;

        let corrector = SpellingCorrector::with_config(dictionary, self.config.corrector_config());
        let corrected = TableCorrector::new(corrector)
            .with_shadow_prefix(self.config.shadow_prefix.as_str())
            .correct(&table, &subject.target_columns)?;

        let mut styled = StyledTable::new(corrected.table.clone());
        let columns = CellClassifier::with_palette(dictionary, self.config.colors.clone())
            .apply(&corrected, &mut styled)?;

        write_table(&styled, &subject.output)?;
        info!(
            "Saved corrected table {} ({} rows)",
            subject.output.display(),
            table.row_count()
        );

        Ok(SubjectReport {
            input: subject.input.clone(),
            output: subject.output.clone(),
            rows: table.row_count(),
            rollbacks: corrected.rollbacks,
            columns,
        })
    }

    /// Build and save the dictionary, then process every subject table in order.
    pub fn run(&self) -> Result<RunReport> {
        let dictionary = self.build_dictionary()?;
        let dictionary_file = self.save_dictionary(&dictionary)?;

        let subjects = self
            .config
            .subject_files
            .iter()
            .map(|subject| self.process_subject(subject, &dictionary))
            .collect::<Result<Vec<_>>>()?;

        Ok(RunReport {
            dictionary_file,
            dictionary_words: dictionary.len(),
            subjects,
        })
    }
}
