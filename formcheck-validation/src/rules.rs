// Rule catalog

use crate::validators;
use crate::{MessageCatalog, RuleError, RuleToken, ValidationError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Names of the built-in rules.
///
/// The catalog is closed: a rule name either maps to one of these variants or
/// is rejected with [`RuleError::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    Alphabetic,
    Alphanumeric,
    Email,
    IntNumber,
    EqualTo,
    ExactLength,
    GreaterThan,
    LessThan,
    MinLength,
    MaxLength,
    Name,
    SpanishDni,
    Username,
}

impl RuleKind {
    /// Every rule in the catalog
    pub const ALL: [RuleKind; 14] = [
        RuleKind::Required,
        RuleKind::Alphabetic,
        RuleKind::Alphanumeric,
        RuleKind::Email,
        RuleKind::IntNumber,
        RuleKind::EqualTo,
        RuleKind::ExactLength,
        RuleKind::GreaterThan,
        RuleKind::LessThan,
        RuleKind::MinLength,
        RuleKind::MaxLength,
        RuleKind::Name,
        RuleKind::SpanishDni,
        RuleKind::Username,
    ];

    /// Look up a rule by the name used in rule expressions
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Name used in rule expressions
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Alphabetic => "alphabetic",
            RuleKind::Alphanumeric => "alphanumeric",
            RuleKind::Email => "email",
            RuleKind::IntNumber => "intnumber",
            RuleKind::EqualTo => "equal_to",
            RuleKind::ExactLength => "exact_length",
            RuleKind::GreaterThan => "greater_than",
            RuleKind::LessThan => "less_than",
            RuleKind::MinLength => "min_length",
            RuleKind::MaxLength => "max_length",
            RuleKind::Name => "name",
            RuleKind::SpanishDni => "spanish_dni",
            RuleKind::Username => "username",
        }
    }

    /// Whether expressions for this rule must carry `=argument`
    pub fn takes_argument(self) -> bool {
        matches!(
            self,
            RuleKind::EqualTo
                | RuleKind::ExactLength
                | RuleKind::GreaterThan
                | RuleKind::LessThan
                | RuleKind::MinLength
                | RuleKind::MaxLength
        )
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog rule with its argument resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    Alphabetic,
    Alphanumeric,
    Email,
    IntNumber,
    EqualTo(String),
    ExactLength(usize),
    GreaterThan(String),
    LessThan(String),
    MinLength(usize),
    MaxLength(usize),
    Name,
    SpanishDni,
    Username,
}

impl Rule {
    /// Resolve a parsed token against the catalog.
    pub fn from_token(token: RuleToken<'_>) -> Result<Self, RuleError> {
        let kind = RuleKind::from_name(token.name)
            .ok_or_else(|| RuleError::Unknown(token.name.to_string()))?;

        let arg = match (kind.takes_argument(), token.arg) {
            (false, Some(arg)) => {
                return Err(RuleError::UnexpectedArgument {
                    rule: kind.name(),
                    arg: arg.to_string(),
                });
            }
            (true, None) => return Err(RuleError::MissingArgument(kind.name())),
            (_, arg) => arg.unwrap_or_default(),
        };

        Ok(match kind {
            RuleKind::Required => Rule::Required,
            RuleKind::Alphabetic => Rule::Alphabetic,
            RuleKind::Alphanumeric => Rule::Alphanumeric,
            RuleKind::Email => Rule::Email,
            RuleKind::IntNumber => Rule::IntNumber,
            RuleKind::EqualTo => Rule::EqualTo(arg.to_string()),
            RuleKind::ExactLength => Rule::ExactLength(parse_length(kind, arg)?),
            RuleKind::GreaterThan => Rule::GreaterThan(arg.to_string()),
            RuleKind::LessThan => Rule::LessThan(arg.to_string()),
            RuleKind::MinLength => Rule::MinLength(parse_length(kind, arg)?),
            RuleKind::MaxLength => Rule::MaxLength(parse_length(kind, arg)?),
            RuleKind::Name => Rule::Name,
            RuleKind::SpanishDni => Rule::SpanishDni,
            RuleKind::Username => Rule::Username,
        })
    }

    /// Catalog entry of this rule
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required => RuleKind::Required,
            Rule::Alphabetic => RuleKind::Alphabetic,
            Rule::Alphanumeric => RuleKind::Alphanumeric,
            Rule::Email => RuleKind::Email,
            Rule::IntNumber => RuleKind::IntNumber,
            Rule::EqualTo(_) => RuleKind::EqualTo,
            Rule::ExactLength(_) => RuleKind::ExactLength,
            Rule::GreaterThan(_) => RuleKind::GreaterThan,
            Rule::LessThan(_) => RuleKind::LessThan,
            Rule::MinLength(_) => RuleKind::MinLength,
            Rule::MaxLength(_) => RuleKind::MaxLength,
            Rule::Name => RuleKind::Name,
            Rule::SpanishDni => RuleKind::SpanishDni,
            Rule::Username => RuleKind::Username,
        }
    }

    /// Argument as written in messages
    pub fn argument(&self) -> Option<String> {
        match self {
            Rule::EqualTo(arg) | Rule::GreaterThan(arg) | Rule::LessThan(arg) => Some(arg.clone()),
            Rule::ExactLength(n) | Rule::MinLength(n) | Rule::MaxLength(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Run the predicate against a value
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Alphabetic => validators::alphabetic(value),
            Rule::Alphanumeric => validators::alphanumeric(value),
            Rule::Email => validators::email(value),
            Rule::IntNumber => validators::integer(value),
            Rule::EqualTo(expected) => value == expected,
            Rule::ExactLength(n) => validators::char_length(value) == *n,
            Rule::GreaterThan(bound) => validators::loose_cmp(value, bound) == Ordering::Greater,
            Rule::LessThan(bound) => validators::loose_cmp(value, bound) == Ordering::Less,
            Rule::MinLength(n) => validators::char_length(value) >= *n,
            Rule::MaxLength(n) => validators::char_length(value) <= *n,
            Rule::Name => validators::name(value),
            Rule::SpanishDni => validators::spanish_dni(value),
            Rule::Username => validators::username(value),
        }
    }

    /// Validate a field value, rendering the failure message from `messages`
    pub fn check(
        &self,
        field: &str,
        value: &str,
        messages: &MessageCatalog,
    ) -> Result<(), ValidationError> {
        if self.is_satisfied_by(value) {
            return Ok(());
        }

        let kind = self.kind();
        let message = messages.render(kind, field, self.argument().as_deref());
        Err(ValidationError::new(field, message)
            .with_rule(kind.name())
            .with_value(value))
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::from_token(RuleToken::parse(s))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.argument() {
            Some(arg) => write!(f, "{}={}", self.kind(), arg),
            None => write!(f, "{}", self.kind()),
        }
    }
}

fn parse_length(kind: RuleKind, arg: &str) -> Result<usize, RuleError> {
    arg.parse::<usize>().map_err(|_| RuleError::InvalidLength {
        rule: kind.name(),
        arg: arg.to_string(),
    })
}
