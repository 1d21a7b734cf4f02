//! Run configuration.
//!
//! A run is described by a JSON document with camelCase keys. Every key is
//! optional; the defaults reproduce the fixed file layout of the personnel
//! workbooks this tool was written for:
//!
//! ```json
//! {
//!   "referenceFile": "dataset.xlsx",
//!   "originalNameFiles": ["Должности_оригинал.xlsx", "Профессии_оригинал.xlsx"],
//!   "subjectFiles": [
//!     {
//!       "input": "ЦЗН.xlsx",
//!       "targetColumns": ["Должность", "Специальность"],
//!       "output": "ЦЗН исправленный.xlsx"
//!     }
//!   ],
//!   "outputDictionaryFile": "Эталонный словарь.xlsx"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::correction::classify::Palette;
use crate::correction::table_corrector::{DEFAULT_SHADOW_PREFIX, shadow_column_name};
use crate::error::{Result, StaffSpellError};
use crate::spelling::corrector::{CorrectorConfig, DEFAULT_THRESHOLD};

/// One table to correct and where to save the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectConfig {
    /// Table to read.
    pub input: PathBuf,
    /// Columns whose values are corrected.
    pub target_columns: Vec<String>,
    /// Destination of the corrected, styled table.
    pub output: PathBuf,
}

impl SubjectConfig {
    pub fn new<P, Q>(input: P, target_columns: Vec<String>, output: Q) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        SubjectConfig {
            input: input.into(),
            target_columns,
            output: output.into(),
        }
    }
}

/// Configuration for a full correction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunConfig {
    /// Reference corpus table seeding the dictionary.
    pub reference_file: PathBuf,
    /// Free-text columns of the reference corpus.
    pub reference_columns: Vec<String>,
    /// Tables of canonical names, also seeding the dictionary.
    pub original_name_files: Vec<PathBuf>,
    /// Naming column of the original-name tables.
    pub original_name_column: String,
    /// Where the accepted dictionary words are saved.
    pub output_dictionary_file: PathBuf,
    /// Column header of the saved dictionary.
    pub dictionary_column: String,
    /// Prefix of the shadow columns holding original values.
    pub shadow_prefix: String,
    /// Minimum similarity (0–100) for a dictionary entry to replace a word.
    pub threshold: f64,
    /// Tables to correct.
    pub subject_files: Vec<SubjectConfig>,
    /// Cell fills for each classification.
    pub colors: Palette,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            reference_file: PathBuf::from("dataset.xlsx"),
            reference_columns: vec!["input".to_string(), "output".to_string()],
            original_name_files: vec![
                PathBuf::from("Должности_оригинал.xlsx"),
                PathBuf::from("Профессии_оригинал.xlsx"),
            ],
            original_name_column: "Наименование".to_string(),
            output_dictionary_file: PathBuf::from("Эталонный словарь.xlsx"),
            dictionary_column: "Words".to_string(),
            shadow_prefix: DEFAULT_SHADOW_PREFIX.to_string(),
            threshold: DEFAULT_THRESHOLD,
            subject_files: vec![
                SubjectConfig::new(
                    "Потребность персонала.xlsx",
                    vec!["Профессия".to_string()],
                    "Потребность персонала исправленный.xlsx",
                ),
                SubjectConfig::new(
                    "ЦЗН.xlsx",
                    vec!["Должность".to_string(), "Специальность".to_string()],
                    "ЦЗН исправленный.xlsx",
                ),
            ],
            colors: Palette::default(),
        }
    }
}

impl RunConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file. Relative paths inside it resolve against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::load_with_base(path, base_dir)
    }

    /// Load a configuration file, resolving relative paths against `base_dir`.
    pub fn load_with_base<P: AsRef<Path>>(path: P, base_dir: &Path) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(StaffSpellError::input_not_found(path));
        }

        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        Ok(config.resolve_paths(base_dir))
    }

    /// Join every relative path with `base_dir`.
    pub fn resolve_paths(mut self, base_dir: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base_dir.join(&*p);
            }
        };

        resolve(&mut self.reference_file);
        resolve(&mut self.output_dictionary_file);
        self.original_name_files.iter_mut().for_each(resolve);
        for subject in &mut self.subject_files {
            resolve(&mut subject.input);
            resolve(&mut subject.output);
        }
        self
    }

    /// Check the configuration for inconsistencies.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(StaffSpellError::invalid_config(format!(
                "threshold must be within 0..=100, got {}",
                self.threshold
            )));
        }
        if self.reference_columns.is_empty() {
            return Err(StaffSpellError::invalid_config(
                "referenceColumns must name at least one column",
            ));
        }
        if self.dictionary_column.is_empty() {
            return Err(StaffSpellError::invalid_config("dictionaryColumn is empty"));
        }
        if self.shadow_prefix.is_empty() {
            return Err(StaffSpellError::invalid_config(
                "shadowPrefix is empty; shadow columns would replace their targets",
            ));
        }

        for subject in &self.subject_files {
            if subject.target_columns.is_empty() {
                return Err(StaffSpellError::invalid_config(format!(
                    "subject '{}' has no target columns",
                    subject.input.display()
                )));
            }
            for (i, column) in subject.target_columns.iter().enumerate() {
                if subject.target_columns[..i].contains(column) {
                    return Err(StaffSpellError::invalid_config(format!(
                        "subject '{}' lists column '{}' more than once",
                        subject.input.display(),
                        column
                    )));
                }
                let shadow = shadow_column_name(&self.shadow_prefix, column);
                if subject.target_columns.contains(&shadow) {
                    return Err(StaffSpellError::invalid_config(format!(
                        "subject '{}': shadow column '{}' is also a target column",
                        subject.input.display(),
                        shadow
                    )));
                }
            }
            if subject.input == subject.output {
                return Err(StaffSpellError::invalid_config(format!(
                    "subject '{}' would overwrite its own input",
                    subject.input.display()
                )));
            }
        }

        Ok(())
    }

    /// Corrector settings derived from this configuration.
    pub fn corrector_config(&self) -> CorrectorConfig {
        CorrectorConfig {
            threshold: self.threshold,
        }
    }
}
