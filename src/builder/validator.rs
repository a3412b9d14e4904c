//! Builder for constructing validators.

use crate::builder::error::RuleError;
use crate::builder::rule::FieldRuleBuilder;
use crate::core::FieldRule;
use crate::form::Validator;
use std::collections::HashSet;

/// Builder for [`Validator`] with a fluent API.
///
/// Fields are validated in the order they are added.
#[derive(Debug, Clone, Default)]
pub struct ValidatorBuilder {
    fields: Vec<(String, FieldRule)>,
}

impl ValidatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field using a rule builder.
    /// Returns an error if the rule fails to build.
    pub fn field(
        mut self,
        name: impl Into<String>,
        builder: FieldRuleBuilder,
    ) -> Result<Self, RuleError> {
        let rule = builder.build()?;
        self.fields.push((name.into(), rule));
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.push((name.into(), rule));
        self
    }

    /// Add multiple pre-built rules at once.
    pub fn fields<I, N>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (N, FieldRule)>,
        N: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(name, rule)| (name.into(), rule)));
        self
    }

    /// Build the validator.
    /// Returns an error if no fields were added or a name repeats.
    pub fn build(self) -> Result<Validator, RuleError> {
        if self.fields.is_empty() {
            return Err(RuleError::NoFields);
        }

        let mut seen = HashSet::with_capacity(self.fields.len());
        for (name, rule) in &self.fields {
            if !seen.insert(name.as_str()) {
                return Err(RuleError::DuplicateField(name.clone()));
            }
            rule.check_bounds()?;
        }

        Ok(Validator {
            fields: self.fields,
        })
    }
}
