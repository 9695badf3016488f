//! Rule failure messages
//!
//! Every rule kind has one message template per catalog. Templates may use
//! `{field}` for the field name and `{arg}` for the rule argument. A catalog
//! is built for a single [`Locale`], so messages never mix languages.

use crate::{RuleKind, SchemaError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

const ENGLISH: [(RuleKind, &str); 14] = [
    (RuleKind::Required, "This field is required"),
    (RuleKind::Alphabetic, "This field only allows alphabetic characters"),
    (RuleKind::Alphanumeric, "This field only allows alphanumeric characters"),
    (RuleKind::Email, "Please enter a valid email"),
    (RuleKind::IntNumber, "This field only allows integers"),
    (RuleKind::EqualTo, "This field must be equal to {arg}"),
    (RuleKind::ExactLength, "This field must be exactly {arg} characters in length"),
    (RuleKind::GreaterThan, "This field must be greater than {arg}"),
    (RuleKind::LessThan, "This field must be less than {arg}"),
    (RuleKind::MinLength, "This field must be at least {arg} characters in length"),
    (RuleKind::MaxLength, "This field must be at most {arg} characters in length"),
    (RuleKind::Name, "Please enter a valid name"),
    (RuleKind::SpanishDni, "Please enter a valid DNI"),
    (RuleKind::Username, "This field only allows letters, digits, underscores and hyphens"),
];

const SPANISH: [(RuleKind, &str); 14] = [
    (RuleKind::Required, "Este campo es obligatorio"),
    (RuleKind::Alphabetic, "Este campo solo admite caracteres alfabéticos"),
    (RuleKind::Alphanumeric, "Este campo solo admite caracteres alfanuméricos"),
    (RuleKind::Email, "Introduce un email válido"),
    (RuleKind::IntNumber, "Este campo solo admite números enteros"),
    (RuleKind::EqualTo, "Este campo debe ser igual a {arg}"),
    (RuleKind::ExactLength, "Este campo debe tener exactamente {arg} caracteres"),
    (RuleKind::GreaterThan, "Este campo debe ser mayor que {arg}"),
    (RuleKind::LessThan, "Este campo debe ser menor que {arg}"),
    (RuleKind::MinLength, "Este campo debe tener al menos {arg} caracteres"),
    (RuleKind::MaxLength, "Este campo debe tener como máximo {arg} caracteres"),
    (RuleKind::Name, "Introduce un nombre válido"),
    (RuleKind::SpanishDni, "Introduce un DNI válido"),
    (RuleKind::Username, "Este campo solo admite letras, números, guiones y guiones bajos"),
];

/// Language of a message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// English (default)
    #[default]
    En,
    /// Spanish
    Es,
}

impl Locale {
    /// Language tag
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl FromStr for Locale {
    type Err = SchemaError;

    /// Accepts `en`, `es` and regional variants such as `es-ES` or `en_US`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            _ => Err(SchemaError::InvalidLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Message templates for every rule kind, in one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: Locale,
    templates: HashMap<RuleKind, String>,
}

impl MessageCatalog {
    /// Built-in catalog for a locale.
    pub fn for_locale(locale: Locale) -> Self {
        let builtin = match locale {
            Locale::En => &ENGLISH,
            Locale::Es => &SPANISH,
        };

        Self {
            locale,
            templates: builtin
                .iter()
                .map(|(kind, template)| (*kind, (*template).to_string()))
                .collect(),
        }
    }

    /// Built-in English catalog.
    pub fn english() -> Self {
        Self::for_locale(Locale::En)
    }

    /// Built-in Spanish catalog.
    pub fn spanish() -> Self {
        Self::for_locale(Locale::Es)
    }

    /// Replace the template for one rule.
    pub fn with_template(mut self, kind: RuleKind, template: impl Into<String>) -> Self {
        self.templates.insert(kind, template.into());
        self
    }

    /// Apply overrides from a JSON object keyed by rule name.
    ///
    /// ```
    /// use formcheck_validation::{MessageCatalog, RuleKind};
    ///
    /// let catalog = MessageCatalog::english()
    ///     .merge_json(r#"{"required": "{field} cannot be blank"}"#)
    ///     .unwrap();
    /// assert_eq!(catalog.render(RuleKind::Required, "email", None), "email cannot be blank");
    /// ```
    pub fn merge_json(self, json: &str) -> Result<Self, SchemaError> {
        let overrides: HashMap<String, String> = serde_json::from_str(json)?;
        self.merge(overrides)
    }

    /// Apply overrides keyed by rule name.
    pub fn merge<I, K, V>(mut self, overrides: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, template) in overrides {
            let key = key.as_ref();
            let kind = RuleKind::from_name(key)
                .ok_or_else(|| SchemaError::UnknownMessageKey(key.to_string()))?;
            self.templates.insert(kind, template.into());
        }
        Ok(self)
    }

    /// Locale of the built-in messages.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Raw template for a rule.
    pub fn template(&self, kind: RuleKind) -> &str {
        self.templates.get(&kind).map(String::as_str).unwrap_or_default()
    }

    /// Render the message for a failed rule.
    ///
    /// `{field}` and `{arg}` are substituted in one pass, so text spliced in
    /// for one placeholder is never rescanned for the other.
    pub fn render(&self, kind: RuleKind, field: &str, arg: Option<&str>) -> String {
        let mut rest = self.template(kind);
        let mut message = String::with_capacity(rest.len() + field.len());

        while let Some(start) = rest.find('{') {
            message.push_str(&rest[..start]);
            let tail = &rest[start..];

            if let Some(after) = tail.strip_prefix("{field}") {
                message.push_str(field);
                rest = after;
            } else if let (Some(after), Some(arg)) = (tail.strip_prefix("{arg}"), arg) {
                message.push_str(arg);
                rest = after;
            } else {
                message.push('{');
                rest = &tail[1..];
            }
        }

        message.push_str(rest);
        message
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}
