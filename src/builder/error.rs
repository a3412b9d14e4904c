//! Build errors for field rules and validators.

use thiserror::Error;

/// Errors that can occur when building rules or looking up fields.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Minimum length ({min}) exceeds maximum length ({max})")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("No fields defined. Add at least one field")]
    NoFields,

    #[error("Field `{0}` is defined more than once")]
    DuplicateField(String),

    #[error("No rule configured for field `{0}`")]
    UnknownField(String),
}
