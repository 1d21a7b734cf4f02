//! Normalized string similarity on a 0–100 scale.
//!
//! The score is the InDel ratio: insertions and deletions cost one, a
//! substitution counts as a deletion plus an insertion. For strings `a` and `b`
//! with longest common subsequence `l` the score is `200 * l / (|a| + |b|)`.

use std::mem;

/// Score reported when two strings are identical.
pub const MAX_SCORE: f64 = 100.0;

/// Length of the longest common subsequence of two strings, in chars.
#[allow(clippy::needless_range_loop)]
pub fn lcs_length(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len2 = s2_chars.len();

    if s1_chars.is_empty() || len2 == 0 {
        return 0;
    }

    // Use only two rows for space optimization
    let mut prev_row = vec![0usize; len2 + 1];
    let mut curr_row = vec![0usize; len2 + 1];

    for i in 1..=s1_chars.len() {
        for j in 1..=len2 {
            curr_row[j] = if s1_chars[i - 1] == s2_chars[j - 1] {
                prev_row[j - 1] + 1
            } else {
                prev_row[j].max(curr_row[j - 1])
            };
        }
        mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// InDel distance: the number of insertions and deletions turning `s1` into `s2`.
pub fn indel_distance(s1: &str, s2: &str) -> usize {
    let total = s1.chars().count() + s2.chars().count();
    total - 2 * lcs_length(s1, s2)
}

/// Similarity ratio between two strings in `[0, 100]`.
///
/// Two empty strings are considered identical and score 100.
pub fn ratio(s1: &str, s2: &str) -> f64 {
    let total = s1.chars().count() + s2.chars().count();
    if total == 0 {
        return MAX_SCORE;
    }

    let distance = total - 2 * lcs_length(s1, s2);
    MAX_SCORE * (total - distance) as f64 / total as f64
}
