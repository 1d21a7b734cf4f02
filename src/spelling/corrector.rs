//! Word- and field-level spelling correction against a [`ReferenceDictionary`].

use std::borrow::Cow;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::ReferenceDictionary;
use crate::spelling::similarity;
use crate::spelling::tokenize::{self, Segment};
use crate::table::CellValue;

/// Default similarity a dictionary entry needs to replace a token.
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// A best match is accepted when its score is at least this value.
    pub threshold: f64,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// What happened to a field during correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldOutcome {
    /// Every word was kept or corrected; the result may equal the input.
    Corrected,
    /// A correction failed the confidence re-check and the field was left as-is.
    RolledBack,
}

/// Result of correcting one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCorrection {
    pub text: String,
    pub outcome: FieldOutcome,
}

/// Spelling corrector borrowing an immutable dictionary.
#[derive(Debug, Clone, Copy)]
pub struct SpellingCorrector<'a> {
    dictionary: &'a ReferenceDictionary,
    config: CorrectorConfig,
}

impl<'a> SpellingCorrector<'a> {
    /// Create a corrector with the default threshold.
    pub fn new(dictionary: &'a ReferenceDictionary) -> Self {
        Self::with_config(dictionary, CorrectorConfig::default())
    }

    pub fn with_config(dictionary: &'a ReferenceDictionary, config: CorrectorConfig) -> Self {
        SpellingCorrector { dictionary, config }
    }

    /// Correct a single token.
    ///
    /// The lowercased token is matched against every dictionary entry; the
    /// closest entry (lowercase) is returned when it scores at least the
    /// threshold, otherwise the token comes back verbatim.
    pub fn correct_word<'w>(&self, word: &'w str) -> Cow<'w, str>
    where
        'a: 'w,
    {
        let word_lower = word.to_lowercase();
        match self.dictionary.best_match(&word_lower) {
            Some(m) if m.score >= self.config.threshold => Cow::Borrowed(m.word),
            _ => Cow::Borrowed(word),
        }
    }

    /// Correct every word of a free-text field, keeping its punctuation layout.
    ///
    /// When a corrected word differs from its source and the two score at or
    /// below the threshold, the whole field is returned untouched. Title-case
    /// source words get a capitalized replacement.
    pub fn correct_field(&self, field: &str) -> FieldCorrection {
        let segments = tokenize::segments(field);
        let mut text = String::with_capacity(field.len());

        for segment in segments {
            let word = match segment {
                Segment::Gap(gap) => {
                    text.push_str(gap);
                    continue;
                }
                Segment::Word(word) => word,
            };

            let corrected = self.correct_word(word);
            let word_lower = word.to_lowercase();
            if word_lower != corrected.to_lowercase()
                && similarity::ratio(&word_lower, &corrected) <= self.config.threshold
            {
                debug!(
                    "Keeping '{}' unchanged: '{}' -> '{}' is not confident enough",
                    field, word, corrected
                );
                return FieldCorrection {
                    text: field.to_string(),
                    outcome: FieldOutcome::RolledBack,
                };
            }

            if tokenize::is_title(word) {
                text.push_str(&tokenize::capitalize(&corrected));
            } else {
                text.push_str(&corrected);
            }
        }

        FieldCorrection {
            text,
            outcome: FieldOutcome::Corrected,
        }
    }

    /// Correct a cell. Only non-empty text is corrected; `None` means the cell passes through.
    pub fn correct_cell(&self, cell: &CellValue) -> Option<FieldCorrection> {
        cell.as_text().map(|text| self.correct_field(text))
    }
}
