//! Word/gap segmentation and the character-class predicates used by the
//! dictionary builder and the correctors.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
    static ref SEGMENT: Regex = Regex::new(r"\w+|\W+").unwrap();
}

/// A slice of a field: either a run of word characters or the run between two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Maximal run of word characters.
    Word(&'a str),
    /// Maximal run of punctuation, whitespace and other non-word characters.
    Gap(&'a str),
}

impl<'a> Segment<'a> {
    /// The underlying text.
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Word(s) | Segment::Gap(s) => s,
        }
    }
}

/// Extract the word tokens of a text, in order.
pub fn words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split a text into alternating word and gap segments covering it completely.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    SEGMENT
        .find_iter(text)
        .map(|m| {
            let s = m.as_str();
            if WORD.is_match(s) {
                Segment::Word(s)
            } else {
                Segment::Gap(s)
            }
        })
        .collect()
}

/// Lowercase a text and drop every non-word character.
pub fn normalize(text: &str) -> String {
    words(&text.to_lowercase()).concat()
}

/// True when the token is non-empty and made of numeric digits only.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}

/// True when the token has at least one cased character and no lowercase ones.
pub fn is_all_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// True when every cased run starts with an uppercase letter followed only by lowercase letters.
pub fn is_title(token: &str) -> bool {
    let mut seen_cased = false;
    let mut previous_cased = false;

    for ch in token.chars() {
        if ch.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if ch.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
