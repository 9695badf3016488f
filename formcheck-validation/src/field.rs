// Field definitions and value lookup

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Rule expressions declared for a field.
///
/// Definitions may give a single expression or a list; both deserialize here
/// and are read back as an ordered slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleList {
    One(String),
    Many(Vec<String>),
}

impl RuleList {
    /// Expressions in declared order
    pub fn as_slice(&self) -> &[String] {
        match self {
            RuleList::One(expression) => std::slice::from_ref(expression),
            RuleList::Many(expressions) => expressions,
        }
    }
}

impl Default for RuleList {
    fn default() -> Self {
        RuleList::Many(Vec::new())
    }
}

impl From<&str> for RuleList {
    fn from(expression: &str) -> Self {
        RuleList::One(expression.to_string())
    }
}

impl From<String> for RuleList {
    fn from(expression: String) -> Self {
        RuleList::One(expression)
    }
}

impl From<Vec<String>> for RuleList {
    fn from(expressions: Vec<String>) -> Self {
        RuleList::Many(expressions)
    }
}

impl From<Vec<&str>> for RuleList {
    fn from(expressions: Vec<&str>) -> Self {
        RuleList::Many(expressions.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RuleList {
    fn from(expressions: [&str; N]) -> Self {
        RuleList::Many(expressions.into_iter().map(str::to_string).collect())
    }
}

/// A named input and its rule chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, also the key into the value lookup
    pub name: String,

    /// Rule chain, evaluated in order
    #[serde(default)]
    pub rules: RuleList,
}

impl Field {
    /// Create a field definition
    ///
    /// ```
    /// use formcheck_validation::Field;
    ///
    /// let email = Field::new("email", ["required", "email"]);
    /// let nickname = Field::new("nickname", "username");
    /// assert_eq!(email.rule_expressions().len(), 2);
    /// assert_eq!(nickname.rule_expressions(), ["username"]);
    /// ```
    pub fn new(name: impl Into<String>, rules: impl Into<RuleList>) -> Self {
        Self {
            name: name.into(),
            rules: rules.into(),
        }
    }

    /// Rule expressions in declared order
    pub fn rule_expressions(&self) -> &[String] {
        self.rules.as_slice()
    }
}

/// Lookup of raw input values by field name.
pub trait ValueSource {
    /// Value supplied for `field`, `None` when the caller supplied nothing
    fn value(&self, field: &str) -> Option<&str>;
}

impl<S: BuildHasher> ValueSource for HashMap<String, String, S> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl<S: BuildHasher> ValueSource for HashMap<&str, &str, S> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).copied()
    }
}

impl ValueSource for BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl<T: ValueSource + ?Sized> ValueSource for &T {
    fn value(&self, field: &str) -> Option<&str> {
        (**self).value(field)
    }
}
