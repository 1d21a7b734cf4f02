//! Format dispatch for reading and writing tables by file extension.

use std::path::Path;

use log::debug;

use crate::error::{Result, StaffSpellError};
use crate::table::{StyledTable, Table, csv, xlsx};

/// On-disk table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Excel/OpenDocument workbooks; only `.xlsx` can be written.
    Spreadsheet,
    /// Comma-separated values with a header line.
    Csv,
}

impl TableFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(TableFormat::Spreadsheet),
            "csv" => Some(TableFormat::Csv),
            _ => None,
        }
    }
}

/// Table name derived from a path: the file stem, or the whole path as a fallback.
pub fn table_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read the first sheet of a workbook or a CSV file.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(StaffSpellError::input_not_found(path));
    }

    debug!("Reading table from {}", path.display());
    match TableFormat::from_path(path) {
        Some(TableFormat::Spreadsheet) => xlsx::read_workbook(path),
        Some(TableFormat::Csv) => csv::read_csv(path),
        None => Err(StaffSpellError::input_unreadable(
            path,
            "unsupported table format",
        )),
    }
}

/// Write a styled table. Fills are only representable in `.xlsx` output.
pub fn write_table<P: AsRef<Path>>(table: &StyledTable, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing table to {}", path.display());

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match ext.as_deref() {
        Some("xlsx") => xlsx::write_workbook(table, path),
        Some("csv") => csv::write_csv(table, path),
        _ => Err(StaffSpellError::invalid_config(format!(
            "cannot write table to '{}': output must be .xlsx or .csv",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            TableFormat::from_path(Path::new("ЦЗН.xlsx")),
            Some(TableFormat::Spreadsheet)
        );
        assert_eq!(
            TableFormat::from_path(Path::new("a/b.CSV")),
            Some(TableFormat::Csv)
        );
        assert_eq!(TableFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(TableFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_table_name() {
        assert_eq!(table_name(&PathBuf::from("dir/ЦЗН.xlsx")), "ЦЗН");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_table("/nonexistent/dataset.xlsx").unwrap_err();
        assert!(matches!(err, StaffSpellError::InputNotFound(_)));
    }

    #[test]
    fn test_read_unsupported_format() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = read_table(file.path()).unwrap_err();
        assert!(matches!(err, StaffSpellError::InputUnreadable { .. }));
    }

    #[test]
    fn test_write_unsupported_format() {
        let table = StyledTable::new(Table::new("t", vec!["a".to_string()]));
        assert!(write_table(&table, "out.ods").is_err());
    }
}
