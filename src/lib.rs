//! # staffspell
//!
//! Dictionary-driven spelling correction for the job-title columns of
//! personnel spreadsheets.
//!
//! ## Features
//!
//! - Reference dictionary built from a corpus and canonical name lists
//! - Word-level fuzzy correction with a confidence re-check per field
//! - Whole-table correction with shadow columns of the original values
//! - Three-way cell classification marked with background fills
//! - Spreadsheet (xlsx) and CSV tables

pub mod cli;
pub mod config;
pub mod correction;
pub mod error;
pub mod pipeline;
pub mod spelling;
pub mod table;

pub mod prelude {
    pub use crate::config::{RunConfig, SubjectConfig};
    pub use crate::correction::{CellClass, CellClassifier, TableCorrector};
    pub use crate::error::{Result, StaffSpellError};
    pub use crate::pipeline::{Pipeline, RunReport};
    pub use crate::spelling::{DictionaryBuilder, ReferenceDictionary, SpellingCorrector};
    pub use crate::table::{CellValue, Table, read_table, write_table};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
