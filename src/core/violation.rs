//! Violation kinds and the violations produced by failing checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The rule a value breached.
///
/// Variants are declared in check order, so sorting kinds reproduces the
/// order in which a [`FieldRule`](crate::core::FieldRule) reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    /// Value was empty (after trimming) but the field is required
    Required,

    /// Value is shorter than the configured minimum
    MinLength,

    /// Value is longer than the configured maximum
    MaxLength,

    /// Value does not match the configured pattern
    Pattern,
}

impl ViolationKind {
    /// Key used for this kind in rule-set configuration.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single rule breach, carrying the message to show the user.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
