//! Builder for constructing field rules.

use crate::builder::error::RuleError;
use crate::core::{FieldRule, Messages, Pattern, ViolationKind};

/// Builder for [`FieldRule`] with a fluent API.
///
/// Fields are optional by default. The pattern is compiled and the length
/// bounds are checked in [`build`](Self::build), so a rule that exists is
/// always usable.
#[derive(Debug, Clone, Default)]
pub struct FieldRuleBuilder {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<String>,
    messages: Messages,
}

impl FieldRuleBuilder {
    /// Create a new builder for an optional, unconstrained field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject blank values.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Accept blank values without running other checks.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the minimum length in characters.
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Set the maximum length in characters.
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Set both length bounds.
    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    /// Set the pattern the whole value must match.
    pub fn pattern(mut self, source: impl Into<String>) -> Self {
        self.pattern = Some(source.into());
        self
    }

    /// Set the message shown for a violation of `kind`.
    pub fn message(mut self, kind: ViolationKind, text: impl Into<String>) -> Self {
        self.messages.insert(kind, text.into());
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<FieldRule, RuleError> {
        let pattern = self
            .pattern
            .map(|pattern| {
                Pattern::new(&pattern).map_err(|source| RuleError::InvalidPattern { pattern, source })
            })
            .transpose()?;

        let rule = FieldRule {
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern,
            messages: self.messages,
        };
        rule.check_bounds()?;

        Ok(rule)
    }
}
