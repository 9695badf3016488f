// Built-in validators
//
// Pure predicates behind the rule catalog. Messages are attached by
// `Rule::check`, so these only answer yes or no.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

// Common regex patterns
static ALPHABETIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z áéíóúñçÁÉÍÓÚÑÇ]+$").unwrap());

static ALPHANUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\- áéíóúñçÁÉÍÓÚÑÇ]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_.\-]+@[0-9a-z.\-]+\.[a-z.]{2,6}$").unwrap());

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[a-z]+ ?)+$").unwrap());

static DNI_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8}[A-Za-z]$").unwrap());

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-]+$").unwrap());

/// Check letter indexed by `number mod 23`.
const DNI_LETTERS: &[u8; 24] = b"TRWAGMYFPDXBNJZSQVHLCKET";

/// Letters (Spanish accents included) and spaces.
pub fn alphabetic(value: &str) -> bool {
    ALPHABETIC_REGEX.is_match(value)
}

/// Alphabetic charset plus digits and hyphen.
pub fn alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(value)
}

/// Basic lowercase `local@domain.tld` shape.
pub fn email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Optional leading `-` followed by digits.
pub fn integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value)
}

/// Lowercase words separated by single spaces.
pub fn name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

/// Letters, digits, underscore and hyphen.
pub fn username(value: &str) -> bool {
    USERNAME_REGEX.is_match(value)
}

/// Spanish national ID: eight digits plus a check letter.
///
/// The letter (case-insensitive) must equal `DNI_LETTERS[digits % 23]`.
///
/// ```
/// use formcheck_validation::validators::spanish_dni;
///
/// assert!(spanish_dni("12345678Z"));
/// assert!(spanish_dni("12345678z"));
/// assert!(!spanish_dni("12345678A"));
/// ```
pub fn spanish_dni(value: &str) -> bool {
    if !DNI_REGEX.is_match(value) {
        return false;
    }

    // The regex guarantees nine ASCII bytes
    let (digits, letter) = value.split_at(8);
    let Ok(number) = digits.parse::<u32>() else {
        return false;
    };

    let expected = DNI_LETTERS[(number % 23) as usize];
    letter.as_bytes()[0].eq_ignore_ascii_case(&expected)
}

/// Length in Unicode scalar values.
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}

/// Compare numerically when both sides are numbers, else by bytes.
///
/// Integers are compared exactly; a fractional side makes both compare as
/// finite `f64`. Surrounding ASCII whitespace is ignored for the numeric
/// parse only.
pub fn loose_cmp(value: &str, other: &str) -> Ordering {
    match (parse_number(value), parse_number(other)) {
        (Some(Number::Int(a)), Some(Number::Int(b))) => a.cmp(&b),
        (Some(a), Some(b)) => a.as_f64().partial_cmp(&b.as_f64()).unwrap_or(Ordering::Equal),
        _ => value.cmp(other),
    }
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

fn parse_number(s: &str) -> Option<Number> {
    let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i128>() {
        return Some(Number::Int(n));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Number::Float)
}
