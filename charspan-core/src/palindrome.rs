//! Palindrome span finder
//!
//! Locates the longest contiguous palindromic substring by expanding
//! outward from each of the `2n - 1` candidate centers: `n` on-character
//! centers for odd-length palindromes and `n - 1` between-character centers
//! for even-length ones. O(n²) worst case (single repeated character),
//! O(1) extra space beyond the reported span.

use crate::types::Span;

/// Returns the longest palindromic substring of `s` as a borrowed slice.
///
/// The empty string yields the empty string; any non-empty input yields at
/// least one character. Ties between maximal-length palindromes resolve to
/// the one whose start index is smallest: centers are scanned left to right
/// and the running best is replaced only on a strictly greater length, so
/// `"babad"` yields `"bab"`, not `"aba"`.
pub fn longest_palindromic_substring(s: &str) -> &str {
    // Character index -> byte offset, so the span converts back to a slice
    // without re-walking the string.
    let offsets: Vec<usize> = s.char_indices().map(|(pos, _)| pos).collect();
    let chars: Vec<char> = s.chars().collect();

    let span = longest_palindrome_span(&chars);
    if span.is_empty() {
        return "";
    }

    let byte_start = offsets[span.start];
    let byte_end = if span.end == chars.len() {
        s.len()
    } else {
        offsets[span.end]
    };
    &s[byte_start..byte_end]
}

/// Expand-around-center scan over a character slice, reporting the winning
/// span in character indices.
///
/// For non-empty input the initial best is the single character at index 0,
/// so the result always has length >= 1. The start of a length-`len`
/// palindrome whose scan center is `i` is `i - (len - 1) / 2` for both the
/// odd and even center kinds.
pub fn longest_palindrome_span(chars: &[char]) -> Span {
    if chars.is_empty() {
        return Span::empty();
    }

    let mut start = 0;
    let mut max_len = 1;

    for i in 0..chars.len() {
        // On-character center (odd length candidate).
        let odd = expand_around_center(chars, i as isize, i as isize);
        // Between-character center (even length candidate, between i and i+1).
        let even = expand_around_center(chars, i as isize, i as isize + 1);

        let len = odd.max(even);
        if len > max_len {
            max_len = len;
            start = i - (len - 1) / 2;
        }
    }

    Span::new(start, start + max_len)
}

/// Grows `left`/`right` outward while both stay in bounds and the characters
/// under them match, then reports the palindrome length for that center.
///
/// The loop overshoots by one step on each side before stopping, hence
/// `right - left - 1`. A seed whose two characters already differ reports 0
/// (even centers) or 1 (odd centers, which trivially match themselves).
fn expand_around_center(chars: &[char], mut left: isize, mut right: isize) -> usize {
    let n = chars.len() as isize;
    while left >= 0 && right < n && chars[left as usize] == chars[right as usize] {
        left -= 1;
        right += 1;
    }
    (right - left - 1) as usize
}

/// Whether `s` as a whole reads identically forwards and backwards.
///
/// The empty string is not considered a palindrome; a single character is.
pub fn is_palindrome(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let chars: Vec<char> = s.chars().collect();
    let mut left = 0;
    let mut right = chars.len() - 1;
    while left < right {
        if chars[left] != chars[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Character-order reversal of `s`. Empty input reverses to the empty string.
pub fn reverse_chars(s: &str) -> String {
    s.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_stops_at_first_mismatch() {
        let chars: Vec<char> = "xabay".chars().collect();
        // Center on 'b': matches a/a, then x/y fails.
        assert_eq!(expand_around_center(&chars, 2, 2), 3);
        // Even center between 'a' and 'b': seed mismatch.
        assert_eq!(expand_around_center(&chars, 1, 2), 0);
    }

    #[test]
    fn test_expansion_at_sequence_edges() {
        let chars: Vec<char> = "aa".chars().collect();
        assert_eq!(expand_around_center(&chars, 0, 0), 1);
        assert_eq!(expand_around_center(&chars, 0, 1), 2);
        // Between-center past the last character never matches.
        assert_eq!(expand_around_center(&chars, 1, 2), 0);
    }

    #[test]
    fn test_span_start_formula_even_palindrome() {
        let chars: Vec<char> = "cbbd".chars().collect();
        let span = longest_palindrome_span(&chars);
        assert_eq!(span, Span::new(1, 3));
    }

    #[test]
    fn test_multibyte_characters_slice_cleanly() {
        // Each kana is 3 bytes; the result must still be a valid slice.
        assert_eq!(longest_palindromic_substring("xしんぶんしy"), "しんぶんし");
        assert_eq!(longest_palindromic_substring("日本本語"), "本本");
    }
}
