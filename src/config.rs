//! Translator configuration
//!
//! The translation pipeline is governed by a single numeric knob: the edit
//! distance above which code elements are considered non-matching. The value
//! is fixed at construction time and threaded explicitly into the collector
//! and matchers; there is no process-wide mutable state.

use serde::Deserialize;
use thiserror::Error;

/// Default edit distance threshold for subject and predicate matching.
pub const DEFAULT_DISTANCE_THRESHOLD: usize = 2;

/// Configuration for the comment-to-guard translation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorConfig {
    /// Edit distance above which a code element no longer matches a subject
    /// or predicate string.
    pub distance_threshold: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        TranslatorConfig {
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
        }
    }
}

/// Error raised when a configuration document cannot be deserialized.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid translator configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TranslatorConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults; unknown fields are
    /// rejected so typos do not silently configure nothing.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}
