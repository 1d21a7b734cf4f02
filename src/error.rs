//! Error types for the staffspell library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`StaffSpellError`] enum. Problems that the correction policy absorbs on its
//! own (non-text cells, low-confidence corrections) are not errors and never
//! show up here.
//!
//! # Examples
//!
//! ```
//! use staffspell::error::{Result, StaffSpellError};
//!
//! fn load() -> Result<()> {
//!     Err(StaffSpellError::missing_column("staff.xlsx", "Профессия"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for staffspell operations.
#[derive(Error, Debug)]
pub enum StaffSpellError {
    /// I/O errors not tied to a specific configured input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A configured input file does not exist.
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// A configured input file exists but is not a readable table.
    #[error("Input unreadable: {}: {reason}", .path.display())]
    InputUnreadable { path: PathBuf, reason: String },

    /// A referenced column is absent from a loaded table.
    #[error("Missing column '{column}' in table '{table}'")]
    MissingColumn { table: String, column: String },

    /// The run configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Spreadsheet writer errors.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// CSV reader/writer errors.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with StaffSpellError.
pub type Result<T> = std::result::Result<T, StaffSpellError>;

impl StaffSpellError {
    /// Create a new input-not-found error.
    pub fn input_not_found<P: AsRef<Path>>(path: P) -> Self {
        StaffSpellError::InputNotFound(path.as_ref().to_path_buf())
    }

    /// Create a new input-unreadable error.
    pub fn input_unreadable<P: AsRef<Path>, S: Into<String>>(path: P, reason: S) -> Self {
        StaffSpellError::InputUnreadable {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a new missing-column error.
    pub fn missing_column<T: Into<String>, C: Into<String>>(table: T, column: C) -> Self {
        StaffSpellError::MissingColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        StaffSpellError::InvalidConfig(msg.into())
    }

    /// Create a new spreadsheet error.
    pub fn spreadsheet<S: Into<String>>(msg: S) -> Self {
        StaffSpellError::Spreadsheet(msg.into())
    }

    /// Whether the error points at a configured input file that is missing or
    /// is not a readable table.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            StaffSpellError::InputNotFound(_) | StaffSpellError::InputUnreadable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = StaffSpellError::missing_column("ЦЗН", "Должность");
        assert_eq!(
            error.to_string(),
            "Missing column 'Должность' in table 'ЦЗН'"
        );

        let error = StaffSpellError::invalid_config("threshold out of range");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: threshold out of range"
        );

        let error = StaffSpellError::input_not_found("dataset.xlsx");
        assert_eq!(error.to_string(), "Input not found: dataset.xlsx");
        assert!(error.is_input_error());

        let error = StaffSpellError::input_unreadable("notes.txt", "unsupported format");
        assert_eq!(
            error.to_string(),
            "Input unreadable: notes.txt: unsupported format"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = StaffSpellError::from(io_error);

        match error {
            StaffSpellError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
        assert!(!StaffSpellError::invalid_config("x").is_input_error());
    }
}
