//! Data Transfer Objects for the API

use crate::error::Result;

/// Input source for scanning
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
        }
    }
}

/// Longest palindromic substring with its location (FFI-safe DTO)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PalindromeDto {
    /// Start index of the span, in characters
    pub start: usize,
    /// End index of the span (exclusive), in characters
    pub end: usize,
    /// The palindromic text itself
    pub text: String,
}

impl PalindromeDto {
    /// Number of characters covered by the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty (only possible for empty input)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Scan metadata with runtime statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes scanned
    pub total_bytes: usize,
    /// Total characters scanned
    pub total_chars: usize,
    /// Scan time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete scan output for one input
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReport {
    /// Longest palindromic substring and its span
    pub palindrome: PalindromeDto,
    /// Length of the longest all-distinct-character substring
    pub longest_unique_len: usize,
    /// Number of distinct characters occurring more than once
    pub duplicate_chars: usize,
    /// First character whose total occurrence count is one, if any
    pub first_non_repeated: Option<char>,
    /// Scan metadata
    pub metadata: Metadata,
}
