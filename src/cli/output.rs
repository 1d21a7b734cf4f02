//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, StaffSpellArgs};
use crate::correction::classify::CellClass;
use crate::error::Result;
use crate::pipeline::{RunReport, SubjectReport};

/// Result structure for dictionary building.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryResult {
    pub dictionary_file: String,
    pub words: usize,
}

/// One checked value.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckedValue {
    pub original: String,
    pub corrected: String,
    pub class: CellClass,
    /// What a styled output cell would display.
    pub displayed: String,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub dictionary_words: usize,
    pub values: Vec<CheckedValue>,
}

/// Output a full run report.
pub fn output_run_report(report: &RunReport, args: &StaffSpellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(report),
        OutputFormat::Human => {
            println!(
                "Dictionary saved to {} ({} words)",
                report.dictionary_file.display(),
                report.dictionary_words
            );
            for subject in &report.subjects {
                output_subject_human(subject, args);
            }
            Ok(())
        }
    }
}

fn output_subject_human(subject: &SubjectReport, args: &StaffSpellArgs) {
    println!(
        "Corrected table saved to {} ({} rows)",
        subject.output.display(),
        subject.rows
    );

    if args.verbosity() > 1 {
        for column in &subject.columns {
            println!(
                "  {}: {} unchanged, {} uncertain, {} clean",
                column.column, column.unchanged, column.uncertain, column.clean
            );
        }
        println!("  rolled back: {}", subject.rollbacks);
    }
}

/// Output the result of building a dictionary.
pub fn output_dictionary_result(result: &DictionaryResult, args: &StaffSpellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result),
        OutputFormat::Human => {
            println!(
                "Dictionary saved to {} ({} words)",
                result.dictionary_file, result.words
            );
            Ok(())
        }
    }
}

/// Output checked values.
pub fn output_check_results(results: &CheckResults, args: &StaffSpellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(results),
        OutputFormat::Human => {
            for value in &results.values {
                if value.original == value.corrected {
                    println!("{} [{}]", value.original, value.class);
                } else {
                    println!("{} -> {} [{}]", value.original, value.corrected, value.class);
                }
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
