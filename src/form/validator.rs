//! Named field rules and form-level validation.

use crate::builder::{RuleError, ValidatorBuilder};
use crate::core::{FieldRule, ValidationResult};
use crate::form::report::{FieldReport, FormReport};
use crate::form::source::FieldSource;
use tracing::{debug, warn};

/// An ordered set of named field rules.
///
/// Built once at startup and never mutated. Glue code calls
/// [`validate`](Self::validate) when a single input loses focus and
/// [`validate_form`](Self::validate_form) when the form is submitted.
///
/// # Example
///
/// ```rust
/// use fieldguard::core::FieldRule;
/// use fieldguard::form::Validator;
///
/// let validator = Validator::builder()
///     .field("username", FieldRule::builder().required().length(3, 20))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let result = validator.validate("username", "ab").unwrap();
/// assert!(!result.is_valid());
///
/// let report = validator.validate_form(&[("username", "admin")]);
/// assert!(!report.blocks_submission());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validator {
    pub(crate) fields: Vec<(String, FieldRule)>,
}

impl Validator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Rule configured for `field`.
    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| rule)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate the raw value of one field.
    pub fn validate(&self, field: &str, raw: &str) -> Result<ValidationResult, RuleError> {
        let Some(rule) = self.get(field) else {
            warn!(field, "validation requested for unknown field");
            return Err(RuleError::UnknownField(field.to_string()));
        };

        let result = rule.validate(raw);
        debug!(field, violations = result.len(), "validated field");
        Ok(result)
    }

    /// Validate every configured field against `source`.
    ///
    /// A field the source does not provide is validated as an empty value.
    pub fn validate_form<S>(&self, source: &S) -> FormReport
    where
        S: FieldSource + ?Sized,
    {
        let fields: Vec<FieldReport> = self
            .fields
            .iter()
            .map(|(name, rule)| FieldReport {
                field: name.clone(),
                result: rule.validate(source.value(name).unwrap_or_default()),
            })
            .collect();

        let report = FormReport::new(fields);
        debug!(
            fields = self.fields.len(),
            invalid = report.invalid_fields().len(),
            "validated form"
        );
        report
    }
}
