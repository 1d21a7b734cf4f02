//! Column-wise correction of whole tables with shadow copies of the originals.

use log::debug;

use crate::error::{Result, StaffSpellError};
use crate::spelling::corrector::{FieldOutcome, SpellingCorrector};
use crate::table::{CellValue, Table};

/// Default prefix of the shadow column holding pre-correction values.
pub const DEFAULT_SHADOW_PREFIX: &str = "Original ";

/// A corrected column and the shadow column holding its original values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetColumn {
    pub column: String,
    pub shadow: String,
}

/// A table whose target columns hold corrected values, paired with their shadow columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectedTable {
    pub table: Table,
    pub targets: Vec<TargetColumn>,
    /// Number of fields left untouched by the confidence re-check.
    pub rollbacks: usize,
}

/// Name of the shadow column for `column`.
pub fn shadow_column_name(prefix: &str, column: &str) -> String {
    format!("{prefix}{column}")
}

/// Applies a [`SpellingCorrector`] to named columns of a table.
#[derive(Debug, Clone)]
pub struct TableCorrector<'a> {
    corrector: SpellingCorrector<'a>,
    shadow_prefix: String,
}

impl<'a> TableCorrector<'a> {
    pub fn new(corrector: SpellingCorrector<'a>) -> Self {
        TableCorrector {
            corrector,
            shadow_prefix: DEFAULT_SHADOW_PREFIX.to_string(),
        }
    }

    /// Use a different prefix for shadow column names.
    pub fn with_shadow_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.shadow_prefix = prefix.into();
        self
    }

    /// Correct `columns` of `table`, returning a new table.
    ///
    /// Every target column must exist, appear once, and have a shadow name
    /// distinct from every target; nothing is corrected otherwise. For each
    /// target a shadow column holding the original values is appended, or
    /// overwritten if the table already has one. Other columns are copied
    /// unchanged.
    pub fn correct(&self, table: &Table, columns: &[String]) -> Result<CorrectedTable> {
        for (i, column) in columns.iter().enumerate() {
            table.column_index(column)?;
            if columns[..i].contains(column) {
                return Err(StaffSpellError::invalid_config(format!(
                    "column '{column}' is listed more than once"
                )));
            }

            let shadow = shadow_column_name(&self.shadow_prefix, column);
            if columns.contains(&shadow) {
                return Err(StaffSpellError::invalid_config(format!(
                    "shadow column '{shadow}' of '{column}' collides with a target column"
                )));
            }
        }

        let mut corrected = table.clone();
        let mut targets = Vec::with_capacity(columns.len());
        let mut rollbacks = 0;

        for column in columns {
            let originals: Vec<CellValue> = table.column_values(column)?.cloned().collect();
            let shadow = shadow_column_name(&self.shadow_prefix, column);

            if corrected.has_column(&shadow) {
                let mut values = originals.iter();
                corrected.map_column(&shadow, |_| values.next().cloned().unwrap_or_default())?;
            } else {
                corrected.add_column(shadow.clone(), originals);
            }

            let mut column_rollbacks = 0;
            corrected.map_column(column, |cell| match self.corrector.correct_cell(cell) {
                Some(result) => {
                    if result.outcome == FieldOutcome::RolledBack {
                        column_rollbacks += 1;
                    }
                    CellValue::Text(result.text)
                }
                None => cell.clone(),
            })?;

            debug!(
                "Corrected column '{}' of '{}' ({} fields rolled back)",
                column,
                table.name(),
                column_rollbacks
            );
            rollbacks += column_rollbacks;
            targets.push(TargetColumn {
                column: column.clone(),
                shadow,
            });
        }

        Ok(CorrectedTable {
            table: corrected,
            targets,
            rollbacks,
        })
    }
}
