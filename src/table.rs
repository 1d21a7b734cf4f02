//! In-memory tables and the readers/writers that move them to and from disk.
//!
//! A [`Table`] is a header plus rows of [`CellValue`]s. Corrected output is
//! wrapped in a [`StyledTable`], which carries per-cell background fills
//! alongside the values.

pub mod csv;
pub mod io;
pub mod styled;
pub mod xlsx;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StaffSpellError};

pub use io::{TableFormat, read_table, write_table};
pub use styled::{CellFormatter, Fill, StyledTable};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// The text of a non-empty string cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Build a cell from raw text, mapping the empty string to [`CellValue::Empty`].
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        if text.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(text)
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A row of cells, one per table column.
pub type Row = Vec<CellValue>;

/// A named table with a header row.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given header.
    pub fn new<S: Into<String>>(name: S, columns: Vec<String>) -> Self {
        Table {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Table name used in error messages, usually the source file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a row, padding or truncating it to the header width.
    ///
    /// The CSV reader rejects records wider than the header before they get here.
    pub fn push_row(&mut self, mut row: Row) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Position of a column in the header.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| StaffSpellError::missing_column(&self.name, column))
    }

    /// Iterate over the values of one column, top to bottom.
    pub fn column_values(&self, column: &str) -> Result<impl Iterator<Item = &CellValue>> {
        let index = self.column_index(column)?;
        Ok(self.rows.iter().map(move |row| &row[index]))
    }

    /// Cell at a row and column position.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Replace the cell at a row and column position. Out-of-range positions are ignored.
    pub fn set_cell(&mut self, row: usize, column: usize, value: CellValue) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = value;
        }
    }

    /// Append a column holding the given values; missing values are left empty.
    /// Returns the new column's index.
    pub fn add_column<S: Into<String>>(&mut self, column: S, values: Vec<CellValue>) -> usize {
        self.columns.push(column.into());
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row.push(values.next().unwrap_or_default());
        }
        self.columns.len() - 1
    }

    /// Replace every value of a column by applying `f` to it.
    pub fn map_column<F>(&mut self, column: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&CellValue) -> CellValue,
    {
        let index = self.column_index(column)?;
        for row in &mut self.rows {
            row[index] = f(&row[index]);
        }
        Ok(())
    }
}
