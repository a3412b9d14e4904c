//! Builder API for ergonomic rule construction.
//!
//! Builders check configuration up front: a pattern that does not compile,
//! inverted length bounds, an empty validator or a repeated field name are
//! reported by `build()` instead of surfacing while a user is typing.

pub mod error;
pub mod rule;
pub mod validator;

pub use error::RuleError;
pub use rule::FieldRuleBuilder;
pub use validator::ValidatorBuilder;

use crate::core::FieldRule;

/// Create a rule for a required field with no other constraints.
///
/// # Example
///
/// ```
/// use fieldguard::builder::required_field;
///
/// let rule = required_field();
/// assert!(!rule.validate("  ").is_valid());
/// assert!(rule.validate("x").is_valid());
/// ```
pub fn required_field() -> FieldRule {
    FieldRule {
        required: true,
        min_length: None,
        max_length: None,
        pattern: None,
        messages: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ViolationKind;

    #[test]
    fn required_field_only_checks_presence() {
        let rule = required_field();

        assert_eq!(rule.validate("").kinds(), vec![ViolationKind::Required]);
        assert!(rule.validate("a").is_valid());
        assert!(rule.validate(&"a".repeat(500)).is_valid());
    }
}
