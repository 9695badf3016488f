// Validation errors

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use thiserror::Error;

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Error message
    pub message: String,

    /// Name of the rule that failed
    pub rule: String,

    /// Value that failed validation (optional)
    pub value: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: "custom".to_string(),
            value: None,
        }
    }

    /// Set the rule name
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Field name to message store filled during a validation pass.
///
/// Holds at most one entry per field. Iteration follows first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<ValidationError>,
}

impl FieldErrors {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one in place
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.insert(ValidationError::new(field, message));
    }

    /// Record a rule failure, replacing any earlier entry for the same field
    pub fn insert(&mut self, error: ValidationError) {
        match self.errors.iter_mut().find(|e| e.field == error.field) {
            Some(existing) => *existing = error,
            None => self.errors.push(error),
        }
    }

    /// Message recorded for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.get_error(field).map(|e| e.message.as_str())
    }

    /// Full error recorded for a field
    pub fn get_error(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Check whether a field has an error
    pub fn contains(&self, field: &str) -> bool {
        self.get_error(field).is_some()
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of fields with errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate `(field, message)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|e| (e.field.as_str(), e.message.as_str()))
    }

    /// Recorded errors in insertion order
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                    "rule": e.rule,
                    "value": e.value,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, message) in self.iter() {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Errors turning a rule expression into a catalog rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Name is not part of the rule catalog
    #[error("unknown rule `{0}`")]
    Unknown(String),

    /// Rule needs an `=argument`
    #[error("rule `{0}` requires an argument")]
    MissingArgument(&'static str),

    /// Rule takes no argument but one was given
    #[error("rule `{rule}` takes no argument, got `{arg}`")]
    UnexpectedArgument { rule: &'static str, arg: String },

    /// Length argument is not a non-negative integer
    #[error("rule `{rule}` expects a non-negative integer length, got `{arg}`")]
    InvalidLength { rule: &'static str, arg: String },
}

/// Caller setup defects that abort a validation pass.
///
/// These never end up in [`FieldErrors`], which only holds end-user messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A rule expression could not be resolved
    #[error("invalid rule `{expression}` on field `{field}`: {source}")]
    InvalidRule {
        field: String,
        expression: String,
        #[source]
        source: RuleError,
    },

    /// The value lookup has no entry for a declared field
    #[error("no value supplied for field `{0}`")]
    MissingValue(String),
}

/// Errors loading form schemas and message catalogs.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported schema format: {0}")]
    UnsupportedFormat(String),

    /// Message override keyed by something other than a rule name
    #[error("Unknown message key: {0}")]
    UnknownMessageKey(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
}
