//! Form-level validation.
//!
//! A [`Validator`] maps field names to [`FieldRule`](crate::core::FieldRule)s.
//! It is invoked on two events:
//!
//! - **loss of focus**: validate one field and render its result inline
//! - **submission**: validate every field and block the submission if any
//!   field reported a violation
//!
//! Field values arrive through the [`FieldSource`] trait, so the validator
//! never reads page state itself.

mod report;
mod source;
mod validator;

pub use report::{FieldReport, FormReport};
pub use source::FieldSource;
pub use validator::Validator;
