//! Integration tests for formcheck-validation

use formcheck_validation::*;
use std::collections::HashMap;

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// One expression per catalog rule, each failing on the value "!".
const FAILING_ON_BANG: [&str; 13] = [
    "alphabetic",
    "alphanumeric",
    "email",
    "intnumber",
    "equal_to=x",
    "exact_length=3",
    "greater_than=~",
    "less_than= ",
    "min_length=2",
    "max_length=0",
    "name",
    "spanish_dni",
    "username",
];

#[test]
fn test_every_rule_fails_on_bang() {
    for expression in FAILING_ON_BANG {
        let rule: Rule = expression.parse().unwrap();
        assert!(
            rule.check("f", "!", &MessageCatalog::english()).is_err(),
            "{} should reject \"!\"",
            expression
        );
    }
}

#[test]
fn test_exemption_holds_for_every_optional_rule() {
    for expression in FAILING_ON_BANG {
        let fields = vec![Field::new("f", expression)];
        let mut validator = FormValidator::new(fields, values(&[("f", "")]));
        assert!(validator.validate_form().unwrap(), "{}", expression);
    }

    // All of them at once
    let fields = vec![Field::new("f", FAILING_ON_BANG.to_vec())];
    let mut validator = FormValidator::new(fields, values(&[("f", "")]));
    assert!(validator.validate_form().unwrap());
}

#[test]
fn test_short_circuit_reports_rule_at_failing_position() {
    // Every rule before position k passes "!", the rule at k fails
    for (k, failing) in FAILING_ON_BANG.iter().enumerate() {
        let mut chain = vec!["required", "max_length=1", "min_length=1"];
        chain.push(*failing);
        chain.extend(FAILING_ON_BANG.iter().copied().filter(|e| e != failing));

        let fields = vec![Field::new("f", chain)];
        let mut validator = FormValidator::new(fields, values(&[("f", "!")]));
        assert!(!validator.validate_form().unwrap());

        let error = validator.errors().get_error("f").unwrap();
        let expected: Rule = failing.parse().unwrap();
        assert_eq!(error.rule, expected.kind().name(), "position {}", k);
        assert_eq!(validator.errors().len(), 1);
    }
}

#[test]
fn test_verdict_matches_empty_error_map() {
    let fields = vec![
        Field::new("a", ["required", "intnumber"]),
        Field::new("b", ["required", "email"]),
        Field::new("c", ["required", "spanish_dni"]),
    ];
    let good = [("a", "7"), ("b", "b@example.com"), ("c", "12345678Z")];
    let bad = [("a", "x"), ("b", "nope"), ("c", "12345678A")];

    for mask in 0u8..8 {
        let pairs: Vec<_> = (0..3)
            .map(|i| if mask & (1 << i) != 0 { bad[i] } else { good[i] })
            .collect();
        let mut validator = FormValidator::new(fields.clone(), values(&pairs));

        let verdict = validator.validate_form().unwrap();
        assert_eq!(verdict, validator.errors().is_empty());
        assert_eq!(validator.errors().len(), mask.count_ones() as usize);
    }
}

#[test]
fn test_spanish_dni_examples() {
    let fields = vec![Field::new("dni", "spanish_dni")];

    let mut valid = FormValidator::new(fields.clone(), values(&[("dni", "12345678Z")]));
    assert!(valid.validate_form().unwrap());

    let mut invalid = FormValidator::new(fields, values(&[("dni", "12345678A")]));
    assert!(!invalid.validate_form().unwrap());
}

#[test]
fn test_exact_length_examples() {
    let fields = vec![Field::new("code", "exact_length=5")];

    let mut short = FormValidator::new(fields.clone(), values(&[("code", "abcd")]));
    assert!(!short.validate_form().unwrap());
    assert_eq!(
        short.errors().get("code"),
        Some("This field must be exactly 5 characters in length")
    );

    let mut exact = FormValidator::new(fields, values(&[("code", "abcde")]));
    assert!(exact.validate_form().unwrap());
}

#[test]
fn test_email_examples() {
    let fields = vec![Field::new("email", "email")];

    let mut ok = FormValidator::new(fields.clone(), values(&[("email", "user@example.com")]));
    assert!(ok.validate_form().unwrap());

    let mut bad = FormValidator::new(fields, values(&[("email", "not-an-email")]));
    assert!(!bad.validate_form().unwrap());
}

#[test]
fn test_required_wins_over_min_length() {
    let fields = vec![Field::new("password", ["required", "min_length=3"])];
    let mut validator = FormValidator::new(fields, values(&[("password", "")]));

    assert!(!validator.validate_form().unwrap());
    let error = validator.errors().get_error("password").unwrap();
    assert_eq!(error.rule, "required");
    assert_eq!(error.message, "This field is required");
}

#[test]
fn test_revalidation_with_new_values() {
    let fields = vec![Field::new("email", ["required", "email"])];
    let mut validator = FormValidator::new(fields, values(&[("email", "")]));
    assert!(!validator.validate_form().unwrap());
    assert!(!validator.validate_form().unwrap());
    assert_eq!(validator.errors().len(), 1);

    let (fields, _) = validator.into_parts();
    let mut validator = FormValidator::new(fields, values(&[("email", "a@b.es")]));
    assert!(validator.validate_form().unwrap());
    assert!(validator.errors().is_empty());
}

#[test]
fn test_configuration_defects_are_not_field_errors() {
    let fields = vec![
        Field::new("ok", "required"),
        Field::new("broken", "min_length=three"),
    ];
    let mut validator = FormValidator::new(fields, values(&[("ok", ""), ("broken", "x")]));

    let error = validator.validate_form().unwrap_err();
    assert!(matches!(
        error,
        FormError::InvalidRule {
            source: RuleError::InvalidLength { .. },
            ..
        }
    ));
    assert!(validator.errors().is_empty());
}

#[test]
fn test_accessors_pass_through() {
    let fields = vec![Field::new("name", "name")];
    let data = values(&[("name", "ana")]);
    let validator = FormValidator::new(fields.clone(), data.clone());

    assert_eq!(validator.fields(), fields.as_slice());
    assert_eq!(validator.values(), &data);
    assert_eq!(validator.messages().locale(), Locale::En);
}
