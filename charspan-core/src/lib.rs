//! Exact, deterministic string-scanning algorithms
//!
//! The two load-bearing components are the palindrome span finder
//! (expand-around-center, O(n²) worst case) and the uniqueness window
//! scanner (two-pointer sliding window, amortized O(n)). Around them the
//! crate packages the smaller collaborators: character frequency utilities,
//! a sort-based order-statistic selector, an arena-backed binary tree with
//! a mirror-symmetry check, and a parenthesis balance scan.
//!
//! Every function is a pure, synchronous computation over an immutable
//! input. Inputs are treated as sequences of opaque `char` tokens: no
//! grapheme clustering, no case folding, no normalization. All functions
//! are total over finite inputs — the only fallible operation is
//! [`select::kth_largest`], whose rank argument is validated.
//!
//! # Example
//!
//! ```rust
//! use charspan_core::{longest_palindromic_substring, longest_unique_substring_len};
//!
//! assert_eq!(longest_palindromic_substring("babad"), "bab");
//! assert_eq!(longest_unique_substring_len("pwwkew"), 3);
//! ```

#![warn(missing_docs)]

pub mod balance;
pub mod frequency;
pub mod palindrome;
pub mod select;
pub mod tree;
pub mod types;
pub mod window;

pub use balance::balanced_parentheses;
pub use frequency::{char_frequencies, count_duplicate_chars, first_non_repeated_char, is_anagram};
pub use palindrome::{
    is_palindrome, longest_palindrome_span, longest_palindromic_substring, reverse_chars,
};
pub use select::{kth_largest, RankError};
pub use tree::{NodeId, TreeArena, TreeNode};
pub use types::Span;
pub use window::longest_unique_substring_len;
