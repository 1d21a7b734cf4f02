//! End-to-end correction runs over spreadsheet tables.

use std::path::{Path, PathBuf};

use staffspell::config::{RunConfig, SubjectConfig};
use staffspell::error::{Result, StaffSpellError};
use staffspell::pipeline::Pipeline;
use staffspell::table::{CellValue, StyledTable, Table, read_table, write_table};
use tempfile::TempDir;

fn write_workbook(dir: &Path, name: &str, columns: &[&str], rows: &[&[&str]]) -> Result<PathBuf> {
    let mut table = Table::new(name, columns.iter().map(|c| c.to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|v| CellValue::from_text(*v)).collect());
    }

    let path = dir.join(format!("{name}.xlsx"));
    write_table(&StyledTable::new(table), &path)?;
    Ok(path)
}

fn setup(dir: &Path) -> Result<RunConfig> {
    write_workbook(
        dir,
        "dataset",
        &["input", "output"],
        &[
            &["инженер старший, мастер", "Инженер"],
            &["ООО 12", "Слесарь"],
            &["", "сварщик"],
        ],
    )?;
    write_workbook(
        dir,
        "Должности_оригинал",
        &["Код", "Наименование"],
        &[&["1", "Электромонтер"], &["2", "Водитель"]],
    )?;
    write_workbook(
        dir,
        "ЦЗН",
        &["id", "Должность", "Специальность"],
        &[
            &["1", "Старший мастер", "Слесарь, инженир"],
            &["2", "инжЕнир старший", ""],
            &["3", "Электромантер", "Волшебник"],
        ],
    )?;

    let config = RunConfig {
        reference_file: "dataset.xlsx".into(),
        original_name_files: vec!["Должности_оригинал.xlsx".into()],
        output_dictionary_file: "Эталонный словарь.xlsx".into(),
        subject_files: vec![SubjectConfig::new(
            "ЦЗН.xlsx",
            vec!["Должность".to_string(), "Специальность".to_string()],
            "ЦЗН исправленный.xlsx",
        )],
        ..Default::default()
    };
    Ok(config.resolve_paths(dir))
}

fn text_column(table: &Table, column: &str) -> Vec<String> {
    table
        .column_values(column)
        .unwrap()
        .map(|v| v.to_string())
        .collect()
}

fn fill_at(path: &Path, column: u32, row: u32) -> Option<String> {
    let book = umya_spreadsheet::reader::xlsx::read(path).unwrap();
    let sheet = book.get_sheet_by_name("Sheet1")?;
    let cell = sheet.get_cell((column, row))?;
    cell.get_style()
        .get_background_color()
        .map(|color| color.get_argb().to_string())
}

#[test]
fn test_full_run_over_workbooks() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path())?;
    let report = Pipeline::new(config)?.run()?;

    let dictionary = read_table(&report.dictionary_file)?;
    assert_eq!(dictionary.columns(), &["Words".to_string()]);
    assert_eq!(
        text_column(&dictionary, "Words"),
        vec![
            "водитель",
            "инженер",
            "мастер",
            "сварщик",
            "слесарь",
            "старший",
            "электромонтер"
        ]
    );

    let output = read_table(&report.subjects[0].output)?;
    assert_eq!(
        output.columns(),
        &[
            "id".to_string(),
            "Должность".to_string(),
            "Специальность".to_string(),
            "Original Должность".to_string(),
            "Original Специальность".to_string(),
        ]
    );

    // clean corrections show the original value, uncertain ones the corrected value
    assert_eq!(
        text_column(&output, "Должность"),
        vec!["Старший мастер", "инжЕнир старший", "Электромантер"]
    );
    assert_eq!(
        text_column(&output, "Original Должность"),
        vec!["Старший мастер", "инжЕнир старший", "Электромантер"]
    );
    assert_eq!(
        text_column(&output, "Специальность"),
        vec!["Слесарь, инженир", "", "Волшебник"]
    );

    let path = &report.subjects[0].output;
    assert_eq!(fill_at(path, 2, 2).as_deref(), Some("FF00FF00"));
    assert_eq!(fill_at(path, 2, 3).as_deref(), Some("FFFF0000"));
    assert_eq!(fill_at(path, 2, 4).as_deref(), Some("FFFF0000"));
    assert_eq!(fill_at(path, 3, 2).as_deref(), Some("FFFF0000"));
    assert_eq!(fill_at(path, 3, 4).as_deref(), Some("FF00FF00"));

    let columns = &report.subjects[0].columns;
    assert_eq!((columns[0].unchanged, columns[0].clean, columns[0].uncertain), (1, 2, 0));
    assert_eq!((columns[1].unchanged, columns[1].clean, columns[1].uncertain), (2, 1, 0));

    Ok(())
}

#[test]
fn test_rerun_overwrites_outputs() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path())?;

    let first = Pipeline::new(config.clone())?.run()?;
    let first_output = read_table(&first.subjects[0].output)?;
    let second = Pipeline::new(config)?.run()?;
    let second_output = read_table(&second.subjects[0].output)?;

    assert_eq!(first, second);
    assert_eq!(first_output.rows(), second_output.rows());
    Ok(())
}

#[test]
fn test_uncertain_cell_keeps_correction() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let mut config = setup(dir.path())?;
    write_workbook(
        dir.path(),
        "Потребность персонала",
        &["Профессия"],
        &[&["Инженир-програмист"], &["Мастир (участка)"]],
    )?;
    config.subject_files = vec![SubjectConfig::new(
        dir.path().join("Потребность персонала.xlsx"),
        vec!["Профессия".to_string()],
        dir.path().join("out.csv"),
    )];

    let report = Pipeline::new(config)?.run()?;
    let output = read_table(&report.subjects[0].output)?;

    // unknown words stay; punctuation and spacing are preserved around corrected words
    assert_eq!(
        text_column(&output, "Профессия"),
        vec!["Инженер-програмист", "Мастер (участка)"]
    );
    assert_eq!(report.subjects[0].columns[0].uncertain, 2);
    Ok(())
}

#[test]
fn test_missing_original_name_file() {
    let dir = TempDir::new().unwrap();
    let mut config = setup(dir.path()).unwrap();
    config.original_name_files.push(dir.path().join("Профессии_оригинал.xlsx"));

    let err = Pipeline::new(config).unwrap().run().unwrap_err();
    assert!(matches!(err, StaffSpellError::InputNotFound(_)));
    assert!(err.is_input_error());
    assert!(!dir.path().join("ЦЗН исправленный.xlsx").exists());
}
