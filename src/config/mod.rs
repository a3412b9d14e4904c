//! Rule-set configuration.
//!
//! Rule sets can be described as a versioned JSON document instead of code,
//! so a page can ship its constraints and messages alongside its markup:
//!
//! ```json
//! {
//!   "version": 1,
//!   "fields": [
//!     {
//!       "name": "username",
//!       "required": true,
//!       "minLength": 3,
//!       "maxLength": 20,
//!       "pattern": "[A-Za-z0-9_]+",
//!       "messages": { "required": "Please enter a username" }
//!     }
//!   ]
//! }
//! ```

use crate::builder::ValidatorBuilder;
use crate::core::FieldRule;
use crate::form::Validator;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub mod error;

pub use error::ConfigError;

/// Version identifier for the configuration format
pub const CONFIG_VERSION: u32 = 1;

/// One named field in a rule-set document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,

    #[serde(flatten)]
    pub rule: FieldRule,
}

/// Serializable description of a [`Validator`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    /// Configuration format version
    pub version: u32,

    /// Fields in validation order
    pub fields: Vec<FieldConfig>,
}

impl RuleSetConfig {
    /// Parse a JSON document and check its version.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;

        if config.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Read and parse a JSON document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            fields = config.fields.len(),
            "loaded rule-set config"
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationFailed(e.to_string()))
    }

    /// Build the validator this document describes.
    pub fn into_validator(self) -> Result<Validator, ConfigError> {
        let validator = ValidatorBuilder::new()
            .fields(self.fields.into_iter().map(|f| (f.name, f.rule)))
            .build()?;
        Ok(validator)
    }
}

impl From<&Validator> for RuleSetConfig {
    fn from(validator: &Validator) -> Self {
        Self {
            version: CONFIG_VERSION,
            fields: validator
                .rules()
                .map(|(name, rule)| FieldConfig {
                    name: name.to_string(),
                    rule: rule.clone(),
                })
                .collect(),
        }
    }
}

impl Validator {
    /// Build a validator from a JSON rule-set document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        RuleSetConfig::from_json(json)?.into_validator()
    }

    /// Load a validator from a JSON rule-set file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        RuleSetConfig::from_file(path)?.into_validator()
    }

    /// Describe this validator as a JSON rule-set document.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        RuleSetConfig::from(self).to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RuleError;
    use crate::core::ViolationKind;
    use std::io::Write;

    const LOGIN_JSON: &str = r#"{
        "version": 1,
        "fields": [
            {
                "name": "username",
                "required": true,
                "minLength": 3,
                "maxLength": 20,
                "pattern": "[A-Za-z0-9_]+",
                "messages": {
                    "required": "Please enter a username",
                    "pattern": "Letters, digits and underscores only"
                }
            },
            {
                "name": "password",
                "required": true,
                "minLength": 6
            }
        ]
    }"#;

    #[test]
    fn parses_rule_set_document() {
        let validator = Validator::from_json(LOGIN_JSON).unwrap();

        assert_eq!(validator.len(), 2);
        let username = validator.get("username").unwrap();
        assert!(username.is_required());
        assert_eq!(username.min_length(), Some(3));
        assert_eq!(username.max_length(), Some(20));

        let result = validator.validate("username", "a b").unwrap();
        assert_eq!(
            result.messages(),
            vec!["Letters, digits and underscores only"]
        );

        let result = validator.validate("password", "12345").unwrap();
        assert_eq!(result.kinds(), vec![ViolationKind::MinLength]);
    }

    #[test]
    fn omitted_keys_use_defaults() {
        let validator =
            Validator::from_json(r#"{"version": 1, "fields": [{"name": "nickname"}]}"#).unwrap();

        let rule = validator.get("nickname").unwrap();
        assert!(!rule.is_required());
        assert!(rule.validate("").is_valid());
    }

    #[test]
    fn rejects_unsupported_version() {
        let result = RuleSetConfig::from_json(r#"{"version": 2, "fields": []}"#);

        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion {
                found: 2,
                supported: CONFIG_VERSION
            })
        ));
    }

    #[test]
    fn rejects_invalid_pattern() {
        let result = RuleSetConfig::from_json(
            r#"{"version": 1, "fields": [{"name": "code", "pattern": "[0-9"}]}"#,
        );
        assert!(matches!(result, Err(ConfigError::DeserializationFailed(_))));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let result = Validator::from_json(
            r#"{"version": 1, "fields": [{"name": "code", "minLength": 8, "maxLength": 4}]}"#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRules(RuleError::InvalidLengthBounds { min: 8, max: 4 }))
        ));
    }

    #[test]
    fn rejects_duplicate_and_empty_field_lists() {
        let result = Validator::from_json(
            r#"{"version": 1, "fields": [{"name": "a"}, {"name": "a"}]}"#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRules(RuleError::DuplicateField(_)))
        ));

        let result = Validator::from_json(r#"{"version": 1, "fields": []}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRules(RuleError::NoFields))
        ));
    }

    #[test]
    fn validator_survives_json_round_trip() {
        let validator = Validator::from_json(LOGIN_JSON).unwrap();
        let json = validator.to_json().unwrap();
        let restored = Validator::from_json(&json).unwrap();

        assert_eq!(restored, validator);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LOGIN_JSON.as_bytes()).unwrap();

        let validator = Validator::from_file(file.path()).unwrap();
        assert_eq!(validator.field_names().collect::<Vec<_>>(), vec!["username", "password"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        match RuleSetConfig::from_file(&path) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
