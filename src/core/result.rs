//! Per-field validation results.

use super::violation::{Violation, ViolationKind};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// How many messages the caller shows for an invalid field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// Only the first violation (inline error text under an input)
    #[default]
    FirstOnly,

    /// Every violation, in check order
    All,
}

/// Ordered violations for one field. Empty means valid.
///
/// # Example
///
/// ```rust
/// use fieldguard::core::{DisplayMode, FieldRule};
///
/// let rule = FieldRule::builder()
///     .required()
///     .min_length(3)
///     .pattern("[a-z]+")
///     .build()
///     .unwrap();
///
/// let result = rule.validate("A1");
/// assert!(!result.is_valid());
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.display(DisplayMode::FirstOnly).len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// A result with no violations.
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Kinds of every violation, in check order.
    pub fn kinds(&self) -> Vec<ViolationKind> {
        self.violations.iter().map(|v| v.kind).collect()
    }

    /// True if a violation of `kind` was reported.
    pub fn has(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    /// All messages, in check order.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    /// Messages to render under `mode`.
    pub fn display(&self, mode: DisplayMode) -> Vec<&str> {
        match mode {
            DisplayMode::FirstOnly => self.first().map(|v| v.message.as_str()).into_iter().collect(),
            DisplayMode::All => self.messages(),
        }
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Validation<(), NonEmptyVec<Violation>>> for ValidationResult {
    fn from(validation: Validation<(), NonEmptyVec<Violation>>) -> Self {
        match validation {
            Validation::Success(()) => Self::valid(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}

impl FromIterator<Violation> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_violations() -> ValidationResult {
        vec![
            Violation::new(ViolationKind::MinLength, "too short"),
            Violation::new(ViolationKind::Pattern, "bad characters"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_result_is_valid() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert!(result.first().is_none());
        assert!(result.display(DisplayMode::All).is_empty());
        assert!(result.display(DisplayMode::FirstOnly).is_empty());
    }

    #[test]
    fn display_mode_controls_message_count() {
        let result = two_violations();

        assert_eq!(result.display(DisplayMode::FirstOnly), vec!["too short"]);
        assert_eq!(
            result.display(DisplayMode::All),
            vec!["too short", "bad characters"]
        );
    }

    #[test]
    fn kinds_preserve_order() {
        let result = two_violations();
        assert_eq!(
            result.kinds(),
            vec![ViolationKind::MinLength, ViolationKind::Pattern]
        );
        assert!(result.has(ViolationKind::Pattern));
        assert!(!result.has(ViolationKind::Required));
    }

    #[test]
    fn converts_from_accumulated_validation() {
        let success: Validation<(), NonEmptyVec<Violation>> = Validation::success(());
        assert!(ValidationResult::from(success).is_valid());

        let checks = vec![
            Validation::fail(Violation::new(ViolationKind::MinLength, "too short")),
            Validation::success(()),
            Validation::fail(Violation::new(ViolationKind::Pattern, "bad characters")),
        ];
        let failure = Validation::all_vec(checks).map(|_| ());

        assert_eq!(ValidationResult::from(failure), two_violations());
    }

    #[test]
    fn serializes_as_plain_list() {
        let json = serde_json::to_value(two_violations()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["kind"], "minLength");
        assert_eq!(json[1]["message"], "bad characters");
    }
}
