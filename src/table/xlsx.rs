//! Spreadsheet tables.
//!
//! Workbooks are read with `calamine` (first worksheet, first row as header)
//! and written with `umya-spreadsheet`, which supports the solid cell fills
//! used to mark corrected cells.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use log::debug;

use crate::error::{Result, StaffSpellError};
use crate::table::io::table_name;
use crate::table::{CellValue, StyledTable, Table};

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from_text(s.as_str()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::from_text(other.to_string()),
    }
}

/// Read the first worksheet of a workbook.
pub fn read_workbook(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        StaffSpellError::input_unreadable(path, format!("failed to open workbook: {e}"))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| StaffSpellError::input_unreadable(path, "no worksheet found"))?
        .map_err(|e| {
            StaffSpellError::input_unreadable(path, format!("failed to read worksheet: {e}"))
        })?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header) => header
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell_from_data(cell) {
                CellValue::Empty => format!("Unnamed: {i}"),
                value => value.to_string(),
            })
            .collect::<Vec<_>>(),
        None => return Err(StaffSpellError::input_unreadable(path, "worksheet is empty")),
    };

    let mut table = Table::new(table_name(path), headers);
    for row in rows {
        table.push_row(row.iter().map(cell_from_data).collect());
    }

    debug!(
        "Read {} rows x {} columns from {}",
        table.row_count(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Write a styled table to a new `.xlsx` workbook, header in row 1.
pub fn write_workbook(table: &StyledTable, path: &Path) -> Result<()> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();

    for (col, name) in table.table().columns().iter().enumerate() {
        sheet
            .get_cell_mut((col as u32 + 1, 1))
            .set_value_string(name.as_str());
    }

    for (r, row) in table.table().rows().iter().enumerate() {
        let row_number = r as u32 + 2;
        for (c, value) in row.iter().enumerate() {
            let cell = sheet.get_cell_mut((c as u32 + 1, row_number));
            match value {
                CellValue::Empty => {}
                CellValue::Text(s) => {
                    cell.set_value_string(s.as_str());
                }
                CellValue::Int(i) => {
                    cell.set_value_number(*i as f64);
                }
                CellValue::Float(f) => {
                    cell.set_value_number(*f);
                }
                CellValue::Bool(b) => {
                    cell.set_value_bool(*b);
                }
            }
        }
    }

    for (r, c, fill) in table.fills() {
        sheet
            .get_style_mut((c as u32 + 1, r as u32 + 2))
            .set_background_color(fill.argb());
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| StaffSpellError::spreadsheet(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellFormatter, Fill};
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Потребность персонала.xlsx");

        let mut table = Table::new(
            "Потребность персонала",
            vec!["№".to_string(), "Профессия".to_string()],
        );
        table.push_row(vec![CellValue::Int(1), CellValue::from_text("Инженер")]);
        table.push_row(vec![CellValue::Int(2), CellValue::Empty]);

        let mut styled = StyledTable::new(table);
        styled.set_fill(0, "Профессия", Fill::new("FF00FF00")).unwrap();
        write_workbook(&styled, &path).unwrap();

        let loaded = read_workbook(&path).unwrap();
        assert_eq!(loaded.name(), "Потребность персонала");
        assert_eq!(
            loaded.columns(),
            &["№".to_string(), "Профессия".to_string()]
        );
        assert_eq!(loaded.row_count(), 2);
        assert_eq!(loaded.cell(0, 1), Some(&CellValue::from_text("Инженер")));
        assert_eq!(loaded.cell(1, 1), Some(&CellValue::Empty));
        assert_eq!(loaded.cell(0, 0).map(|v| v.to_string()), Some("1".to_string()));
    }

    #[test]
    fn test_read_invalid_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let err = read_workbook(&path).unwrap_err();
        assert!(matches!(err, StaffSpellError::InputUnreadable { .. }));
    }
}
