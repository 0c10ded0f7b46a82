//! Character frequency utilities
//!
//! Duplicate counting, anagram equality, and first-non-repeated lookup, all
//! built on the same single-pass character-to-count map. Comparisons are
//! strictly case-sensitive with no normalization: `'a'` and `'A'` are
//! different characters.

use std::collections::HashMap;

/// Builds a character-to-occurrence-count map over `s` in one pass.
pub fn char_frequencies(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Number of distinct characters that occur more than once in `s`.
/// Empty input yields 0.
pub fn count_duplicate_chars(s: &str) -> usize {
    char_frequencies(s)
        .values()
        .filter(|&&count| count > 1)
        .count()
}

/// Whether `a` and `b` contain exactly the same characters with the same
/// multiplicities.
///
/// Unequal character counts fail immediately; identical strings pass without
/// building the maps. Map equality is independent of character order.
pub fn is_anagram(a: &str, b: &str) -> bool {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a != len_b {
        return false;
    }
    if a == b {
        return true;
    }
    char_frequencies(a) == char_frequencies(b)
}

/// First character of `s` (in input order) whose total occurrence count is
/// exactly one, or `None` when every character repeats or the input is
/// empty.
pub fn first_non_repeated_char(s: &str) -> Option<char> {
    let counts = char_frequencies(s);
    // Second pass over the input keeps the original character order without
    // an order-preserving map.
    s.chars().find(|c| counts[c] == 1)
}
