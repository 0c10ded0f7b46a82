//! Public API for the charspan string-scanning algorithms
//!
//! This crate provides a stable facade over `charspan-core`: a scanner that
//! runs the string analyses in one call and reports them as plain DTOs,
//! plus re-exports of the individual algorithm functions for callers that
//! want them à la carte.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::time::Instant;

use dto::{Metadata, PalindromeDto};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, ScanReport};
pub use error::{ApiError, Result};

// Re-export the core algorithms for direct use
pub use charspan_core::{
    balanced_parentheses, char_frequencies, count_duplicate_chars, first_non_repeated_char,
    is_anagram, is_palindrome, kth_largest, longest_palindrome_span,
    longest_palindromic_substring, longest_unique_substring_len, reverse_chars, NodeId, RankError,
    Span, TreeArena, TreeNode,
};

/// Main entry point for string scanning
///
/// Runs the palindrome span finder, the uniqueness window scanner, and the
/// frequency collaborators over an input and packages the results with
/// timing metadata. The scanner itself is stateless; the configuration only
/// carries the optional input size cap.
#[derive(Debug, Clone, Default)]
pub struct StringScanner {
    config: Config,
}

impl StringScanner {
    /// Create a scanner with the default (unbounded) configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a scanner with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scan input and report all analyses.
    pub fn scan(&self, input: Input) -> Result<ScanReport> {
        let text = input.read_text()?;

        let start = Instant::now();

        let chars: Vec<char> = text.chars().collect();
        if let Some(cap) = self.config.max_input_chars {
            if chars.len() > cap {
                return Err(ApiError::InputTooLarge {
                    chars: chars.len(),
                    cap,
                });
            }
        }

        let span = longest_palindrome_span(&chars);
        let palindrome = PalindromeDto {
            start: span.start,
            end: span.end,
            text: chars[span.start..span.end].iter().collect(),
        };

        let report = ScanReport {
            palindrome,
            longest_unique_len: longest_unique_substring_len(&text),
            duplicate_chars: count_duplicate_chars(&text),
            first_non_repeated: first_non_repeated_char(&text),
            metadata: Metadata {
                total_bytes: text.len(),
                total_chars: chars.len(),
                processing_time_ms: start.elapsed().as_millis() as u64,
            },
        };

        Ok(report)
    }

    /// Scan text directly (convenience method).
    pub fn scan_text(&self, text: &str) -> Result<ScanReport> {
        self.scan(Input::from_text(text))
    }
}

// Convenience functions

/// Scan text with the default configuration.
pub fn scan_text(text: &str) -> Result<ScanReport> {
    StringScanner::new().scan_text(text)
}
