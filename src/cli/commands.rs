//! Command implementations for the staffspell CLI.

use std::path::Path;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::RunConfig;
use crate::correction::classify::{CellClass, classify};
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::spelling::corrector::{CorrectorConfig, SpellingCorrector};
use crate::spelling::dictionary::ReferenceDictionary;
use crate::table::read_table;

/// Execute a CLI command.
pub fn execute_command(args: StaffSpellArgs) -> Result<()> {
    match &args.command {
        Command::Run(run_args) => run(run_args, &args),
        Command::BuildDictionary(run_args) => build_dictionary(run_args, &args),
        Command::Check(check_args) => check(check_args, &args),
    }
}

/// Resolve the run configuration described by the command line.
pub fn load_run_config(args: &RunArgs) -> Result<RunConfig> {
    let config = match (&args.config, &args.base_dir) {
        (Some(path), Some(base_dir)) => RunConfig::load_with_base(path, base_dir)?,
        (Some(path), None) => RunConfig::load(path)?,
        (None, base_dir) => {
            debug!("No configuration file given, using defaults");
            RunConfig::default().resolve_paths(base_dir.as_deref().unwrap_or(Path::new("")))
        }
    };
    Ok(config)
}

/// Build the dictionary and correct every configured table.
fn run(args: &RunArgs, cli_args: &StaffSpellArgs) -> Result<()> {
    let pipeline = Pipeline::new(load_run_config(args)?)?;
    info!(
        "Correcting {} table(s)",
        pipeline.config().subject_files.len()
    );

    let report = pipeline.run()?;
    output_run_report(&report, cli_args)
}

/// Build and save the dictionary only.
fn build_dictionary(args: &RunArgs, cli_args: &StaffSpellArgs) -> Result<()> {
    let pipeline = Pipeline::new(load_run_config(args)?)?;

    let dictionary = pipeline.build_dictionary()?;
    let path = pipeline.save_dictionary(&dictionary)?;

    output_dictionary_result(
        &DictionaryResult {
            dictionary_file: path.display().to_string(),
            words: dictionary.len(),
        },
        cli_args,
    )
}

/// Correct and classify the given values against a saved dictionary.
fn check(args: &CheckArgs, cli_args: &StaffSpellArgs) -> Result<()> {
    let table = read_table(&args.dictionary)?;
    let dictionary = ReferenceDictionary::from_table(&table, &args.column)?;
    info!(
        "Loaded {} words from {}",
        dictionary.len(),
        args.dictionary.display()
    );

    let results = check_values(&dictionary, args.threshold, &args.texts);
    output_check_results(&results, cli_args)
}

/// Correct and classify each value the way a table cell would be.
pub fn check_values(
    dictionary: &ReferenceDictionary,
    threshold: f64,
    texts: &[String],
) -> CheckResults {
    let corrector = SpellingCorrector::with_config(dictionary, CorrectorConfig { threshold });

    let values = texts
        .iter()
        .map(|text| {
            let corrected = corrector.correct_field(text).text;
            let class = classify(text, &corrected, dictionary);
            let displayed = if class == CellClass::CleanCorrection {
                text.clone()
            } else {
                corrected.clone()
            };
            CheckedValue {
                original: text.clone(),
                corrected,
                class,
                displayed,
            }
        })
        .collect();

    CheckResults {
        dictionary_words: dictionary.len(),
        values,
    }
}
