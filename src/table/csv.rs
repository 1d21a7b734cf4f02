//! CSV tables.
//!
//! The first record is the header. Every other field becomes a text cell, or
//! [`CellValue::Empty`] when blank; no numeric inference is done so values
//! round-trip unchanged.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::debug;

use crate::error::{Result, StaffSpellError};
use crate::table::io::table_name;
use crate::table::{CellValue, StyledTable, Table};

/// Read a CSV file into a table.
pub fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| StaffSpellError::input_unreadable(path, e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| StaffSpellError::input_unreadable(path, format!("failed to read header: {e}")))?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    if headers.is_empty() {
        return Err(StaffSpellError::input_unreadable(path, "CSV header is empty"));
    }

    let width = headers.len();
    let mut table = Table::new(table_name(path), headers);
    for record in reader.records() {
        let record =
            record.map_err(|e| StaffSpellError::input_unreadable(path, e.to_string()))?;
        // short records are padded; longer ones would lose data
        if record.len() > width {
            let line = record.position().map_or(0, |p| p.line());
            return Err(StaffSpellError::input_unreadable(
                path,
                format!(
                    "record on line {line} has {} fields, header has {width}",
                    record.len()
                ),
            ));
        }
        table.push_row(record.iter().map(CellValue::from_text).collect());
    }

    Ok(table)
}

/// Write the values of a styled table as CSV. Fills cannot be represented and are dropped.
pub fn write_csv(table: &StyledTable, path: &Path) -> Result<()> {
    let fills = table.fills().count();
    if fills > 0 {
        debug!(
            "Dropping {} cell fills when writing CSV {}",
            fills,
            path.display()
        );
    }

    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(table.table().columns())?;
    for row in table.table().rows() {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    writer.flush()?;

    Ok(())
}
