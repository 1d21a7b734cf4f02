//! Reference dictionary built from the free-text columns of reference tables.

use ahash::AHashSet;

use crate::error::Result;
use crate::spelling::similarity;
use crate::spelling::tokenize;
use crate::table::{CellValue, Table};

/// The best dictionary entry for a query token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    /// Dictionary entry, always lowercase.
    pub word: &'a str,
    /// Similarity score on the 0–100 scale.
    pub score: f64,
}

/// An immutable set of lowercase words considered correctly spelled.
///
/// Entries are kept sorted so that scans, ties and saved dictionaries are
/// deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDictionary {
    /// Sorted, deduplicated entries.
    words: Vec<String>,
    /// Set of all words for fast lookup
    index: AHashSet<String>,
}

impl ReferenceDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary from already accepted words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index: AHashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let mut words: Vec<String> = index.iter().cloned().collect();
        words.sort_unstable();

        ReferenceDictionary { words, index }
    }

    /// Load a previously saved dictionary from one column of a table.
    pub fn from_table(table: &Table, column: &str) -> Result<Self> {
        let words = table
            .column_values(column)?
            .filter_map(CellValue::as_text)
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>();

        Ok(Self::from_words(words))
    }

    /// Render the dictionary as a single-column table, one word per row.
    pub fn to_table(&self, name: &str, column: &str) -> Table {
        let mut table = Table::new(name, vec![column.to_string()]);
        for word in &self.words {
            table.push_row(vec![CellValue::Text(word.clone())]);
        }
        table
    }

    /// Check if a word exists in the dictionary, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word) || self.index.contains(&word.to_lowercase())
    }

    /// Get the total number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Find the entry most similar to `query`.
    ///
    /// The query is compared as given; callers lowercase it first. Ties keep
    /// the entry that sorts first. Returns `None` only for an empty dictionary.
    pub fn best_match(&self, query: &str) -> Option<Match<'_>> {
        if let Some(word) = self.index.get(query) {
            return Some(Match {
                word: word.as_str(),
                score: similarity::MAX_SCORE,
            });
        }

        let mut best: Option<Match<'_>> = None;
        for word in &self.words {
            let score = similarity::ratio(query, word);
            if best.is_none_or(|b| score > b.score) {
                best = Some(Match { word, score });
            }
        }
        best
    }
}

/// Accumulates tokens from reference text and turns them into a [`ReferenceDictionary`].
///
/// Tokens keep their original case until [`DictionaryBuilder::build`], where
/// purely numeric and all-uppercase forms (codes, acronyms) are dropped before
/// lowercasing. A word that also appears in a mixed-case form elsewhere
/// therefore survives.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    tokens: AHashSet<String>,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every word token of a free-text value.
    pub fn add_text(&mut self, text: &str) {
        for word in tokenize::words(text) {
            if !self.tokens.contains(word) {
                self.tokens.insert(word.to_string());
            }
        }
    }

    /// Add a cell; only non-empty text cells contribute.
    pub fn add_cell(&mut self, cell: &CellValue) {
        if let Some(text) = cell.as_text() {
            self.add_text(text);
        }
    }

    /// Scan one column of a table. Returns the number of text cells scanned.
    pub fn add_column(&mut self, table: &Table, column: &str) -> Result<usize> {
        let mut scanned = 0;
        for cell in table.column_values(column)? {
            if cell.as_text().is_some() {
                scanned += 1;
            }
            self.add_cell(cell);
        }
        Ok(scanned)
    }

    /// Number of distinct raw tokens collected so far.
    pub fn raw_token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Filter and normalize the collected tokens.
    pub fn build(self) -> ReferenceDictionary {
        ReferenceDictionary::from_words(
            self.tokens
                .iter()
                .filter(|t| !tokenize::is_numeric(t) && !tokenize::is_all_upper(t)),
        )
    }
}
