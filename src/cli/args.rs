//! Command line argument parsing for the staffspell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::corrector::DEFAULT_THRESHOLD;

/// staffspell - dictionary-driven spelling correction for personnel spreadsheets
#[derive(Parser, Debug, Clone)]
#[command(name = "staffspell")]
#[command(about = "Correct misspelled job titles in personnel spreadsheets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StaffSpellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StaffSpellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the dictionary and correct every configured table
    Run(RunArgs),

    /// Only build and save the reference dictionary
    #[command(name = "build-dictionary")]
    BuildDictionary(RunArgs),

    /// Correct and classify ad-hoc values against a saved dictionary
    Check(CheckArgs),
}

/// Arguments shared by the configuration-driven commands
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Run configuration file (JSON); built-in defaults are used when omitted
    #[arg(short, long, value_name = "CONFIG_FILE", env = "STAFFSPELL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory that relative paths resolve against (default: the config file's directory)
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,
}

/// Arguments for checking values against a saved dictionary
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Saved dictionary table (.xlsx or .csv)
    #[arg(short, long, value_name = "DICTIONARY_FILE")]
    pub dictionary: PathBuf,

    /// Dictionary column name
    #[arg(long, default_value = "Words")]
    pub column: String,

    /// Minimum similarity (0-100) to accept a correction
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Values to check
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    Human,
    /// JSON document
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let args = StaffSpellArgs::parse_from(["staffspell", "run", "--config", "run.json", "-v"]);
        assert_eq!(args.verbosity(), 2);
        match args.command {
            Command::Run(run) => {
                assert_eq!(run.config, Some(PathBuf::from("run.json")));
                assert!(run.base_dir.is_none());
            }
            _ => panic!("Expected run command"),
        }
    }

    #[test]
    fn test_parse_check() {
        let args = StaffSpellArgs::parse_from([
            "staffspell",
            "-q",
            "-f",
            "json",
            "check",
            "-d",
            "dict.xlsx",
            "инжЕнир старший",
        ]);
        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Check(check) => {
                assert_eq!(check.column, "Words");
                assert_eq!(check.threshold, 80.0);
                assert_eq!(check.texts, vec!["инжЕнир старший".to_string()]);
            }
            _ => panic!("Expected check command"),
        }
    }

    #[test]
    fn test_check_requires_text() {
        assert!(StaffSpellArgs::try_parse_from(["staffspell", "check", "-d", "dict.xlsx"]).is_err());
    }
}
