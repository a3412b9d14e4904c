//! Sources of raw field values.

use std::collections::{BTreeMap, HashMap};

/// Supplies the raw value of a named field.
///
/// This is the seam between the validator and whatever holds the form's
/// current values. Glue code reads its inputs once and hands them over
/// instead of the validator reaching into shared state.
///
/// # Example
///
/// ```rust
/// use fieldguard::form::FieldSource;
///
/// let values = [("username", "admin"), ("password", "123456")];
///
/// assert_eq!(values.value("username"), Some("admin"));
/// assert_eq!(values.value("remember"), None);
/// ```
pub trait FieldSource {
    /// Raw, untrimmed value of `field`, or `None` if the source lacks it.
    fn value(&self, field: &str) -> Option<&str>;
}

impl FieldSource for HashMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FieldSource for [(K, V)] {
    fn value(&self, field: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| name.as_ref() == field)
            .map(|(_, value)| value.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> FieldSource for [(K, V); N] {
    fn value(&self, field: &str) -> Option<&str> {
        self.as_slice().value(field)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FieldSource for Vec<(K, V)> {
    fn value(&self, field: &str) -> Option<&str> {
        self.as_slice().value(field)
    }
}
