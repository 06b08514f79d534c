//! Parser configuration.
//!
//! The only genuine knob on this parser is which whole-field values count as
//! "missing": that convention belongs to whatever tabular loader supplies the
//! field, so it is configurable rather than hard-coded.

use crate::constants::DEFAULT_MISSING_VALUE_MARKERS;
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::parser::LegalStatusParser`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Whole-field values treated as "no value provided"
    ///
    /// A raw input equal to one of these after trimming yields an empty
    /// record sequence, identically to an empty string.
    pub missing_value_markers: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            missing_value_markers: DEFAULT_MISSING_VALUE_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ParserConfig {
    /// Replace the missing-value marker set
    pub fn with_missing_value_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_value_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether a raw field value represents missing data
    pub fn is_missing_value(&self, value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty() || self.missing_value_markers.iter().any(|m| m == trimmed)
    }
}
