//! Fieldguard: pure, rule-driven form field validation
//!
//! Fieldguard follows the "pure core, imperative shell" philosophy. Checking
//! a field is a pure function of its rule and raw value; reading inputs,
//! rendering messages and blocking submissions stay with the caller.
//!
//! # Core Concepts
//!
//! - **FieldRule**: required flag, length bounds, an anchored pattern and
//!   the messages to show for each kind of violation
//! - **ValidationResult**: ordered violations for one field, empty when valid
//! - **Validator**: named field rules, checked one at a time (loss of focus)
//!   or all together (form submission)
//!
//! Checks run in a fixed order. A blank value on a required field reports
//! only the `required` violation; otherwise minimum length, maximum length
//! and pattern are checked independently and every failure is reported.
//!
//! # Example
//!
//! ```rust
//! use fieldguard::core::{DisplayMode, FieldRule, ViolationKind};
//! use fieldguard::form::Validator;
//!
//! let validator = Validator::builder()
//!     .field(
//!         "username",
//!         FieldRule::builder()
//!             .required()
//!             .length(3, 20)
//!             .pattern("[A-Za-z0-9_]+"),
//!     )
//!     .unwrap()
//!     .field("password", FieldRule::builder().required().length(6, 20))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let result = validator.validate("username", "a b").unwrap();
//! assert_eq!(result.kinds(), vec![ViolationKind::Pattern]);
//!
//! let report = validator.validate_form(&[("username", "admin"), ("password", "12345")]);
//! assert!(report.blocks_submission());
//! assert_eq!(report.first_invalid(), Some("password"));
//! assert_eq!(report.messages(DisplayMode::FirstOnly).len(), 1);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod form;
pub mod presets;
pub mod sanitize;

// Re-export commonly used types
pub use builder::{FieldRuleBuilder, RuleError, ValidatorBuilder};
pub use config::{ConfigError, RuleSetConfig};
pub use self::core::{DisplayMode, FieldRule, Pattern, ValidationResult, Violation, ViolationKind};
pub use form::{FieldSource, FormReport, Validator};
