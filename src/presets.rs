//! Ready-made rule sets for the login pages.

use crate::builder::RuleError;
use crate::core::{FieldRule, ViolationKind};
use crate::form::Validator;

/// Name of the username field.
pub const USERNAME: &str = "username";

/// Name of the password field.
pub const PASSWORD: &str = "password";

/// Rules of the full login page.
///
/// - username: required, 3 to 20 characters, letters, digits and underscores
/// - password: required, 6 to 20 characters
///
/// # Example
///
/// ```rust
/// use fieldguard::presets::{self, PASSWORD, USERNAME};
///
/// let validator = presets::login().unwrap();
///
/// assert!(validator.validate(USERNAME, "abc_123").unwrap().is_valid());
/// assert!(!validator.validate(PASSWORD, "12345").unwrap().is_valid());
/// ```
pub fn login() -> Result<Validator, RuleError> {
    Validator::builder()
        .field(
            USERNAME,
            FieldRule::builder()
                .required()
                .length(3, 20)
                .pattern("[A-Za-z0-9_]+")
                .message(ViolationKind::Required, "Please enter a username")
                .message(ViolationKind::MinLength, "Username must be 3-20 characters")
                .message(ViolationKind::MaxLength, "Username must be 3-20 characters")
                .message(
                    ViolationKind::Pattern,
                    "Username may only contain letters, digits and underscores",
                ),
        )?
        .field(
            PASSWORD,
            FieldRule::builder()
                .required()
                .length(6, 20)
                .message(ViolationKind::Required, "Please enter a password")
                .message(ViolationKind::MinLength, "Password must be 6-20 characters")
                .message(ViolationKind::MaxLength, "Password must be 6-20 characters"),
        )?
        .build()
}

/// Rules of the quick landing page: presence checks plus a six character
/// minimum for the password.
pub fn quick_login() -> Result<Validator, RuleError> {
    Validator::builder()
        .field(
            USERNAME,
            FieldRule::builder()
                .required()
                .message(ViolationKind::Required, "Please enter a username"),
        )?
        .field(
            PASSWORD,
            FieldRule::builder()
                .required()
                .min_length(6)
                .message(ViolationKind::Required, "Please enter a password")
                .message(
                    ViolationKind::MinLength,
                    "Password must be at least 6 characters",
                ),
        )?
        .build()
}
