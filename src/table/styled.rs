//! Tables with per-cell background fills.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::{CellValue, Table};

/// A solid background fill, stored as an ARGB hex string such as `FF00FF00`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fill(String);

impl Fill {
    pub fn new<S: Into<String>>(argb: S) -> Self {
        Fill(argb.into().to_uppercase())
    }

    /// The ARGB hex string.
    pub fn argb(&self) -> &str {
        &self.0
    }
}

/// Per-cell formatting operations the classifier needs from an output table.
pub trait CellFormatter {
    /// Set the background fill of a data cell (row 0 is the first row below the header).
    fn set_fill(&mut self, row: usize, column: &str, fill: Fill) -> Result<()>;

    /// Override the displayed value of a data cell.
    fn set_value(&mut self, row: usize, column: &str, value: CellValue) -> Result<()>;
}

/// A table plus the fills to apply when it is written.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledTable {
    table: Table,
    /// Fills keyed by (row, column index).
    fills: BTreeMap<(usize, usize), Fill>,
}

impl StyledTable {
    pub fn new(table: Table) -> Self {
        StyledTable {
            table,
            fills: BTreeMap::new(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Fill of a cell, if any.
    pub fn fill(&self, row: usize, column: usize) -> Option<&Fill> {
        self.fills.get(&(row, column))
    }

    /// All fills in row-major order.
    pub fn fills(&self) -> impl Iterator<Item = (usize, usize, &Fill)> {
        self.fills.iter().map(|(&(r, c), fill)| (r, c, fill))
    }
}

impl CellFormatter for StyledTable {
    fn set_fill(&mut self, row: usize, column: &str, fill: Fill) -> Result<()> {
        let index = self.table.column_index(column)?;
        self.fills.insert((row, index), fill);
        Ok(())
    }

    fn set_value(&mut self, row: usize, column: &str, value: CellValue) -> Result<()> {
        let index = self.table.column_index(column)?;
        self.table.set_cell(row, index, value);
        Ok(())
    }
}
