//! Core validation types and logic.
//!
//! This module contains the pure functional core of the crate:
//! - Field rules via [`FieldRule`]
//! - Anchored regular expressions via [`Pattern`]
//! - Violations and per-field results
//!
//! Nothing in this module performs I/O or holds mutable state. Callers pass
//! raw values in and render the returned [`ValidationResult`].

mod pattern;
mod result;
mod rule;
mod violation;

pub use pattern::Pattern;
pub use result::{DisplayMode, ValidationResult};
pub use rule::{FieldRule, Messages};
pub use violation::{Violation, ViolationKind};
