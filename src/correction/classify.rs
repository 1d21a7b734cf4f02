//! Three-way classification of corrected cells and the fills that mark them.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::correction::table_corrector::CorrectedTable;
use crate::error::Result;
use crate::spelling::dictionary::ReferenceDictionary;
use crate::spelling::tokenize;
use crate::table::{CellFormatter, CellValue, Fill};

/// How a corrected cell relates to its original value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellClass {
    /// Same words as the original once case and punctuation are ignored.
    Unchanged,
    /// Changed, and the corrected text still contains a word outside the dictionary.
    UncertainCorrection,
    /// Changed into dictionary words only. The displayed value reverts to the original.
    CleanCorrection,
}

impl fmt::Display for CellClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellClass::Unchanged => "unchanged",
            CellClass::UncertainCorrection => "uncertain",
            CellClass::CleanCorrection => "clean",
        };
        f.write_str(name)
    }
}

/// Classify a corrected value against its original.
pub fn classify(original: &str, corrected: &str, dictionary: &ReferenceDictionary) -> CellClass {
    if tokenize::normalize(original) == tokenize::normalize(corrected) {
        return CellClass::Unchanged;
    }

    let corrected_lower = corrected.to_lowercase();
    if corrected != original
        && tokenize::words(&corrected_lower)
            .into_iter()
            .any(|word| !dictionary.contains(word))
    {
        CellClass::UncertainCorrection
    } else {
        CellClass::CleanCorrection
    }
}

/// Background fills for each class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub unchanged: Fill,
    pub uncertain: Fill,
    pub clean: Fill,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            unchanged: Fill::new("FF00FF00"),
            uncertain: Fill::new("FFFFFF00"),
            clean: Fill::new("FFFF0000"),
        }
    }
}

impl Palette {
    pub fn fill_for(&self, class: CellClass) -> &Fill {
        match class {
            CellClass::Unchanged => &self.unchanged,
            CellClass::UncertainCorrection => &self.uncertain,
            CellClass::CleanCorrection => &self.clean,
        }
    }
}

/// Per-column class counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    pub unchanged: usize,
    pub uncertain: usize,
    pub clean: usize,
}

impl ColumnSummary {
    fn new(column: &str) -> Self {
        ColumnSummary {
            column: column.to_string(),
            ..Default::default()
        }
    }

    fn record(&mut self, class: CellClass) {
        match class {
            CellClass::Unchanged => self.unchanged += 1,
            CellClass::UncertainCorrection => self.uncertain += 1,
            CellClass::CleanCorrection => self.clean += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.unchanged + self.uncertain + self.clean
    }
}

/// Classifies and styles the target cells of a corrected table.
#[derive(Debug, Clone)]
pub struct CellClassifier<'a> {
    dictionary: &'a ReferenceDictionary,
    palette: Palette,
}

impl<'a> CellClassifier<'a> {
    pub fn new(dictionary: &'a ReferenceDictionary) -> Self {
        Self::with_palette(dictionary, Palette::default())
    }

    pub fn with_palette(dictionary: &'a ReferenceDictionary, palette: Palette) -> Self {
        CellClassifier {
            dictionary,
            palette,
        }
    }

    /// Classify one pair of cells. Empty and non-text cells compare by their display text.
    pub fn classify_cells(&self, original: &CellValue, corrected: &CellValue) -> CellClass {
        classify(
            &original.to_string(),
            &corrected.to_string(),
            self.dictionary,
        )
    }

    /// Color every target cell of `corrected` through `formatter`, reverting
    /// clean corrections to their original value.
    ///
    /// `formatter` must address the same rows and columns as `corrected.table`.
    pub fn apply<F>(&self, corrected: &CorrectedTable, formatter: &mut F) -> Result<Vec<ColumnSummary>>
    where
        F: CellFormatter + ?Sized,
    {
        let table = &corrected.table;
        let mut summaries = Vec::with_capacity(corrected.targets.len());

        for target in &corrected.targets {
            let column = table.column_index(&target.column)?;
            let shadow = table.column_index(&target.shadow)?;
            let mut summary = ColumnSummary::new(&target.column);

            for (row, cells) in table.rows().iter().enumerate() {
                let original = &cells[shadow];
                let class = self.classify_cells(original, &cells[column]);

                formatter.set_fill(row, &target.column, self.palette.fill_for(class).clone())?;
                if class == CellClass::CleanCorrection {
                    formatter.set_value(row, &target.column, original.clone())?;
                }
                summary.record(class);
            }

            debug!(
                "Column '{}': {} unchanged, {} uncertain, {} clean",
                summary.column, summary.unchanged, summary.uncertain, summary.clean
            );
            summaries.push(summary);
        }

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::table_corrector::TableCorrector;
    use crate::spelling::corrector::SpellingCorrector;
    use crate::table::{StyledTable, Table};

    fn dictionary() -> ReferenceDictionary {
        ReferenceDictionary::from_words(["инженер", "старший", "мастер"])
    }

    #[test]
    fn test_classify_unchanged() {
        let dict = dictionary();
        assert_eq!(classify("Инженер", "инженер", &dict), CellClass::Unchanged);
        assert_eq!(classify("инженер,старший", "Инженер старший", &dict), CellClass::Unchanged);
        assert_eq!(classify("", "", &dict), CellClass::Unchanged);
    }

    #[test]
    fn test_classify_uncertain() {
        let dict = dictionary();
        // "сварщик" is not a dictionary word
        assert_eq!(
            classify("Инженир сварщик", "Инженер сварщик", &dict),
            CellClass::UncertainCorrection
        );
    }

    #[test]
    fn test_classify_clean() {
        let dict = dictionary();
        assert_eq!(
            classify("инжЕнир старший", "инженер старший", &dict),
            CellClass::CleanCorrection
        );
        assert_eq!(classify("мастир", "мастер", &dict), CellClass::CleanCorrection);
    }

    #[test]
    fn test_palette() {
        let palette = Palette::default();
        assert_eq!(palette.fill_for(CellClass::Unchanged).argb(), "FF00FF00");
        assert_eq!(palette.fill_for(CellClass::UncertainCorrection).argb(), "FFFFFF00");
        assert_eq!(palette.fill_for(CellClass::CleanCorrection).argb(), "FFFF0000");
        assert_eq!(CellClass::CleanCorrection.to_string(), "clean");
    }

    #[test]
    fn test_apply_colors_and_reverts() {
        let dict = dictionary();
        let mut table = Table::new("staff", vec!["Профессия".to_string()]);
        for value in ["Старший мастер", "инжЕнир старший", "Инженир сварщик"] {
            table.push_row(vec![CellValue::from_text(value)]);
        }
        table.push_row(vec![CellValue::Empty]);

        let corrector = TableCorrector::new(SpellingCorrector::new(&dict));
        let corrected = corrector
            .correct(&table, &["Профессия".to_string()])
            .unwrap();
        let mut styled = StyledTable::new(corrected.table.clone());

        let summaries = CellClassifier::new(&dict)
            .apply(&corrected, &mut styled)
            .unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].unchanged, 2);
        assert_eq!(summaries[0].clean, 1);
        assert_eq!(summaries[0].uncertain, 1);
        assert_eq!(summaries[0].total(), 4);

        let palette = Palette::default();
        assert_eq!(styled.fill(0, 0), Some(&palette.unchanged));
        assert_eq!(styled.fill(1, 0), Some(&palette.clean));
        assert_eq!(styled.fill(2, 0), Some(&palette.uncertain));
        assert_eq!(styled.fill(3, 0), Some(&palette.unchanged));
        // shadow columns are not styled
        assert_eq!(styled.fill(0, 1), None);

        // clean corrections show the original, uncertain ones the corrected form
        assert_eq!(styled.table().cell(1, 0), Some(&CellValue::from_text("инжЕнир старший")));
        assert_eq!(styled.table().cell(2, 0), Some(&CellValue::from_text("Инженер сварщик")));
    }

    #[test]
    fn test_apply_is_deterministic() {
        let dict = dictionary();
        let mut table = Table::new("staff", vec!["Профессия".to_string()]);
        table.push_row(vec![CellValue::from_text("Мастир, старщий")]);

        let run = || {
            let corrector = TableCorrector::new(SpellingCorrector::new(&dict));
            let corrected = corrector.correct(&table, &["Профессия".to_string()]).unwrap();
            let mut styled = StyledTable::new(corrected.table.clone());
            CellClassifier::new(&dict).apply(&corrected, &mut styled).unwrap();
            styled
        };

        assert_eq!(run(), run());
    }
}
