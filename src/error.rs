//! Error types for legal-status parsing.
//!
//! The parser never fails: malformed input degrades to partial or empty
//! records. The variants here are skip-level diagnostics, produced while
//! deciding to ignore a line or sub-field and logged at debug level. They
//! are never propagated out of a parse call.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LegalStatusError {
    #[error("unrecognised field label: '{label}'")]
    UnrecognisedLabel { label: String },

    #[error("marker '{marker}' present without an extractable value")]
    EmptyMarkerValue { marker: String },
}

pub type Result<T> = std::result::Result<T, LegalStatusError>;
