//! Whole-form validation reports.

use crate::core::{DisplayMode, ValidationResult};
use serde::Serialize;

/// Result for one field of a submitted form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: String,
    pub result: ValidationResult,
}

/// Results for every configured field, in validator order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormReport {
    fields: Vec<FieldReport>,
}

impl FormReport {
    pub(crate) fn new(fields: Vec<FieldReport>) -> Self {
        Self { fields }
    }

    /// True when every field passed.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.result.is_valid())
    }

    /// True when any field failed and the submission must not proceed.
    pub fn blocks_submission(&self) -> bool {
        !self.is_valid()
    }

    pub fn result(&self, field: &str) -> Option<&ValidationResult> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| &f.result)
    }

    /// Names of failing fields, in validator order.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| !f.result.is_valid())
            .map(|f| f.field.as_str())
            .collect()
    }

    /// The field to focus after a failed submission.
    pub fn first_invalid(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| !f.result.is_valid())
            .map(|f| f.field.as_str())
    }

    /// Messages of failing fields under `mode`.
    pub fn messages(&self, mode: DisplayMode) -> Vec<(&str, Vec<&str>)> {
        self.fields
            .iter()
            .filter(|f| !f.result.is_valid())
            .map(|f| (f.field.as_str(), f.result.display(mode)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter()
    }
}
