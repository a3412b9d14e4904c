//! Field rules and the pure validation core.

use super::pattern::Pattern;
use super::result::ValidationResult;
use super::violation::{Violation, ViolationKind};
use crate::builder::{FieldRuleBuilder, RuleError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Display strings keyed by the violation they describe.
pub type Messages = BTreeMap<ViolationKind, String>;

/// Constraints and messages for one form field.
///
/// Rules are immutable once built. Validation is a pure function of the
/// rule and the raw input: it never mutates either and always returns the
/// same result for the same input.
///
/// # Example
///
/// ```rust
/// use fieldguard::core::{FieldRule, ViolationKind};
///
/// let username = FieldRule::builder()
///     .required()
///     .min_length(3)
///     .max_length(20)
///     .pattern("[A-Za-z0-9_]+")
///     .message(ViolationKind::Required, "Please enter a username")
///     .build()
///     .unwrap();
///
/// assert!(username.validate("abc_123").is_valid());
/// assert_eq!(username.validate("   ").messages(), vec!["Please enter a username"]);
/// assert_eq!(username.validate("ab").kinds(), vec![ViolationKind::MinLength]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    #[serde(default)]
    pub(crate) required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) pattern: Option<Pattern>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub(crate) messages: Messages,
}

impl FieldRule {
    pub fn builder() -> FieldRuleBuilder {
        FieldRuleBuilder::new()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Message shown for `kind`, falling back to a generic English text
    /// when the rule does not configure one.
    pub fn message(&self, kind: ViolationKind) -> String {
        if let Some(message) = self.messages.get(&kind) {
            return message.clone();
        }

        match kind {
            ViolationKind::Required => "This field is required".to_string(),
            ViolationKind::MinLength => format!(
                "Must be at least {} characters",
                self.min_length.unwrap_or_default()
            ),
            ViolationKind::MaxLength => format!(
                "Must be at most {} characters",
                self.max_length.unwrap_or_default()
            ),
            ViolationKind::Pattern => "Contains invalid characters".to_string(),
        }
    }

    /// Validate `raw`, returning every violation in check order.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        ValidationResult::from(self.check(raw))
    }

    /// Run the checks as an accumulating [`Validation`].
    ///
    /// An empty (after trimming) value short-circuits: it yields only the
    /// `required` violation when the field is required and succeeds
    /// otherwise. A non-empty value runs the length and pattern checks
    /// independently and accumulates every failure. Lengths count the
    /// characters of the trimmed value; the pattern sees the raw value.
    pub fn check(&self, raw: &str) -> Validation<(), NonEmptyVec<Violation>> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return if self.required {
                Validation::fail(self.violation(ViolationKind::Required))
            } else {
                Validation::success(())
            };
        }

        let length = trimmed.chars().count();
        let mut checks: Vec<Validation<(), NonEmptyVec<Violation>>> = Vec::with_capacity(3);

        if let Some(min) = self.min_length {
            checks.push(self.ensure(length >= min, ViolationKind::MinLength));
        }

        if let Some(max) = self.max_length {
            checks.push(self.ensure(length <= max, ViolationKind::MaxLength));
        }

        if let Some(pattern) = &self.pattern {
            checks.push(self.ensure(pattern.is_match(raw), ViolationKind::Pattern));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Reject bounds that no value could satisfy.
    pub(crate) fn check_bounds(&self) -> Result<(), RuleError> {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => {
                Err(RuleError::InvalidLengthBounds { min, max })
            }
            _ => Ok(()),
        }
    }

    fn ensure(&self, ok: bool, kind: ViolationKind) -> Validation<(), NonEmptyVec<Violation>> {
        if ok {
            Validation::success(())
        } else {
            Validation::fail(self.violation(kind))
        }
    }

    fn violation(&self, kind: ViolationKind) -> Violation {
        Violation::new(kind, self.message(kind))
    }
}
