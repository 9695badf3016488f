//! Form schema loading
//!
//! Field definitions usually come from the surrounding application, but they
//! can also live in JSON or TOML files:
//!
//! ```toml
//! locale = "es"
//!
//! [messages]
//! required = "Campo obligatorio"
//!
//! [[fields]]
//! name = "email"
//! rules = ["required", "email"]
//!
//! [[fields]]
//! name = "nickname"
//! rules = "username"
//! ```
//!
//! Rule expressions are not checked at load time. They are resolved when a
//! validation pass runs.

use crate::{Field, FormValidator, Locale, MessageCatalog, SchemaError, ValueSource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Supported schema file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }

    /// Detect the format from a file path
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| SchemaError::UnsupportedFormat(path.display().to_string()))?;

        Self::from_extension(ext).ok_or_else(|| SchemaError::UnsupportedFormat(ext.to_string()))
    }
}

/// Field definitions plus message settings for one form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Locale of the built-in messages
    #[serde(default)]
    pub locale: Locale,

    /// Template overrides keyed by rule name
    #[serde(default)]
    pub messages: BTreeMap<String, String>,

    /// Fields in evaluation order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl FormSchema {
    /// Create a schema with English messages
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Parse a JSON schema
    pub fn from_json(content: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a TOML schema
    pub fn from_toml(content: &str) -> Result<Self, SchemaError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse schema content in the given format
    pub fn parse(content: &str, format: FileFormat) -> Result<Self, SchemaError> {
        match format {
            FileFormat::Json => Self::from_json(content),
            FileFormat::Toml => Self::from_toml(content),
        }
    }

    /// Load a schema file, detecting the format from its extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;

        let schema = Self::parse(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            fields = schema.fields.len(),
            locale = %schema.locale,
            "loaded form schema"
        );
        Ok(schema)
    }

    /// Message catalog for the schema's locale with overrides applied
    pub fn message_catalog(&self) -> Result<MessageCatalog, SchemaError> {
        MessageCatalog::for_locale(self.locale).merge(&self.messages)
    }

    /// Build a validator over `values`
    pub fn into_validator<V: ValueSource>(
        self,
        values: V,
    ) -> Result<FormValidator<V>, SchemaError> {
        let messages = self.message_catalog()?;
        Ok(FormValidator::new(self.fields, values).with_messages(messages))
    }
}
