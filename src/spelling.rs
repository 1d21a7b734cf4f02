//! Spelling correction for short free-text fields such as job titles.
//!
//! This module provides the reference dictionary and its builder, the 0–100
//! similarity scorer, word/gap tokenization, and the word and field correctors
//! that sit on top of them.

pub mod corrector;
pub mod dictionary;
pub mod similarity;
pub mod tokenize;

// Re-export commonly used types
pub use corrector::{CorrectorConfig, FieldCorrection, FieldOutcome, SpellingCorrector};
pub use dictionary::{DictionaryBuilder, Match, ReferenceDictionary};
