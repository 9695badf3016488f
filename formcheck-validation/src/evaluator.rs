// Field evaluation

use crate::{Field, FormError, MessageCatalog, Rule, RuleKind, RuleToken, ValidationError};
use tracing::{debug, trace};

/// Result of evaluating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Every rule passed
    Valid,
    /// Empty value on a field without `required`; no rule ran
    Exempt,
    /// First failing rule
    Invalid(ValidationError),
}

impl FieldOutcome {
    /// `Valid` and `Exempt` both count as valid
    pub fn is_valid(&self) -> bool {
        !matches!(self, FieldOutcome::Invalid(_))
    }

    /// The failure, if any
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            FieldOutcome::Invalid(error) => Some(error),
            _ => None,
        }
    }
}

/// A field's rule chain resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleChain {
    field: String,
    rules: Vec<Rule>,
}

impl RuleChain {
    /// Resolve every expression of a field definition.
    ///
    /// Fails on the first expression that does not name a catalog rule or
    /// carries a bad argument.
    pub fn compile(field: &Field) -> Result<Self, FormError> {
        let rules = field
            .rule_expressions()
            .iter()
            .map(|expression| {
                Rule::from_token(RuleToken::parse(expression)).map_err(|source| {
                    FormError::InvalidRule {
                        field: field.name.clone(),
                        expression: expression.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            field: field.name.clone(),
            rules,
        })
    }

    /// Field this chain belongs to
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Rules in declared order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether `required` appears anywhere in the chain
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|rule| rule.kind() == RuleKind::Required)
    }

    /// Evaluate the chain against a value.
    ///
    /// An empty value skips the whole chain unless the field is required.
    /// Otherwise rules run in order and evaluation stops at the first failure.
    pub fn evaluate(&self, value: &str, messages: &MessageCatalog) -> FieldOutcome {
        if value.is_empty() && !self.is_required() {
            trace!(field = %self.field, "empty optional field, skipping rules");
            return FieldOutcome::Exempt;
        }

        for rule in &self.rules {
            if let Err(error) = rule.check(&self.field, value, messages) {
                debug!(field = %self.field, rule = %rule.kind(), "field failed validation");
                return FieldOutcome::Invalid(error);
            }
        }

        debug!(field = %self.field, "field passed validation");
        FieldOutcome::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleError;

    fn chain(rules: &[&str]) -> RuleChain {
        RuleChain::compile(&Field::new("field", rules.to_vec())).unwrap()
    }

    #[test]
    fn test_compile_reports_field_and_expression() {
        let field = Field::new("age", ["required", "at_least=3"]);
        let error = RuleChain::compile(&field).unwrap_err();
        assert_eq!(
            error,
            FormError::InvalidRule {
                field: "age".to_string(),
                expression: "at_least=3".to_string(),
                source: RuleError::Unknown("at_least".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_optional_field_is_exempt() {
        let outcome = chain(&["email", "min_length=10"]).evaluate("", &MessageCatalog::english());
        assert_eq!(outcome, FieldOutcome::Exempt);
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_whitespace_value_is_not_exempt() {
        let outcome = chain(&["email"]).evaluate(" ", &MessageCatalog::english());
        let error = outcome.error().unwrap();
        assert_eq!(error.rule, "email");
        assert_eq!(error.message, "Please enter a valid email");
    }

    #[test]
    fn test_required_disables_exemption() {
        let outcome =
            chain(&["required", "min_length=3"]).evaluate("", &MessageCatalog::english());
        assert_eq!(outcome.error().unwrap().rule, "required");
    }

    #[test]
    fn test_required_later_in_chain_still_counts() {
        let outcome =
            chain(&["min_length=3", "required"]).evaluate("", &MessageCatalog::english());
        assert_eq!(outcome.error().unwrap().rule, "min_length");
    }

    #[test]
    fn test_short_circuit_reports_first_failure() {
        let outcome = chain(&["intnumber", "min_length=5", "email"])
            .evaluate("abc", &MessageCatalog::english());
        assert_eq!(outcome.error().unwrap().rule, "intnumber");

        let outcome = chain(&["intnumber", "min_length=5", "email"])
            .evaluate("123", &MessageCatalog::english());
        assert_eq!(outcome.error().unwrap().rule, "min_length");
    }

    #[test]
    fn test_all_rules_pass() {
        let outcome = chain(&["required", "username", "max_length=12"])
            .evaluate("john_doe", &MessageCatalog::english());
        assert_eq!(outcome, FieldOutcome::Valid);
    }

    #[test]
    fn test_empty_chain_is_valid() {
        let outcome = chain(&[]).evaluate("anything", &MessageCatalog::english());
        assert_eq!(outcome, FieldOutcome::Valid);
    }
}
