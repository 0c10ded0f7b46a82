//! Uniqueness window scanner
//!
//! Two-pointer sliding window over the input characters, maintaining the
//! invariant that everything inside the window is pairwise distinct. Both
//! pointers only ever move forward, so the total pointer movement is
//! bounded by `2n` and the scan is amortized O(n). The presence set costs
//! O(min(alphabet size, n)).

use std::collections::HashSet;

/// Returns the length of the longest contiguous substring of `s` containing
/// no repeated character. Empty input yields 0.
///
/// `"abcabcbb"` yields 3 (`"abc"`), `"bbbbb"` yields 1, `"pwwkew"` yields 3
/// (`"wke"` — a substring, not the subsequence `"pwke"`).
pub fn longest_unique_substring_len(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();

    let mut present: HashSet<char> = HashSet::new();
    let mut left = 0;
    let mut max_len = 0;

    for right in 0..chars.len() {
        // Evict from the left until the incoming character is admissible.
        // Evicts at most the current window, and `left` never retreats.
        while present.contains(&chars[right]) {
            present.remove(&chars[left]);
            left += 1;
        }

        present.insert(chars[right]);
        max_len = max_len.max(right - left + 1);
    }

    max_len
}
