//! High-level configuration for scanning

use crate::error::{ApiError, Result};

/// Configuration for a [`crate::StringScanner`].
///
/// The single knob is an optional input size cap. The palindrome finder is
/// O(n²) in the worst case and the scanners define no internal deadline, so
/// bounding latency on adversarial inputs is the caller's job; the cap is
/// that mechanism. `None` (the default) accepts inputs of any length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) max_input_chars: Option<usize>,
}

impl Config {
    /// Create a builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured input cap, in characters.
    pub fn max_input_chars(&self) -> Option<usize> {
        self.max_input_chars
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Reject inputs longer than `chars` characters.
    pub fn max_input_chars(mut self, chars: usize) -> Self {
        self.config.max_input_chars = Some(chars);
        self
    }

    /// Accept inputs of any length (the default).
    pub fn unbounded(mut self) -> Self {
        self.config.max_input_chars = None;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<Config> {
        if self.config.max_input_chars == Some(0) {
            return Err(ApiError::Config(
                "max_input_chars must be at least 1".to_string(),
            ));
        }
        Ok(self.config)
    }
}
