// Form validation

use crate::{Field, FieldErrors, FieldOutcome, FormError, MessageCatalog, RuleChain, ValueSource};
use tracing::{debug, warn};

/// Validate every field and collect one message per failing field.
///
/// All rule chains are resolved before any value is looked at, so a bad rule
/// expression aborts the pass even when evaluation would never reach it.
/// A missing value also aborts the pass; rule failures never do.
pub fn validate<V>(
    fields: &[Field],
    values: &V,
    messages: &MessageCatalog,
) -> Result<FieldErrors, FormError>
where
    V: ValueSource + ?Sized,
{
    let chains = fields
        .iter()
        .map(RuleChain::compile)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| warn!(error = %e, "aborting validation pass"))?;

    let mut errors = FieldErrors::new();
    for chain in &chains {
        let value = values.value(chain.field()).ok_or_else(|| {
            let error = FormError::MissingValue(chain.field().to_string());
            warn!(error = %error, "aborting validation pass");
            error
        })?;

        if let FieldOutcome::Invalid(error) = chain.evaluate(value, messages) {
            errors.insert(error);
        }
    }

    debug!(
        fields = fields.len(),
        failed = errors.len(),
        "validation pass complete"
    );
    Ok(errors)
}

/// Validator over a fixed set of field definitions and values.
///
/// # Examples
///
/// ```
/// use formcheck_validation::{Field, FormValidator};
/// use std::collections::HashMap;
///
/// let fields = vec![
///     Field::new("email", ["required", "email"]),
///     Field::new("dni", "spanish_dni"),
/// ];
/// let values = HashMap::from([("email", "user@example.com"), ("dni", "12345678A")]);
///
/// let mut validator = FormValidator::new(fields, values);
/// assert!(!validator.validate_form().unwrap());
/// assert_eq!(validator.errors().get("dni"), Some("Please enter a valid DNI"));
/// ```
#[derive(Debug, Clone)]
pub struct FormValidator<V> {
    fields: Vec<Field>,
    values: V,
    messages: MessageCatalog,
    errors: FieldErrors,
}

impl<V: ValueSource> FormValidator<V> {
    /// Create a validator with the default English messages
    pub fn new(fields: impl Into<Vec<Field>>, values: V) -> Self {
        Self {
            fields: fields.into(),
            values,
            messages: MessageCatalog::default(),
            errors: FieldErrors::new(),
        }
    }

    /// Use a different message catalog
    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    /// Field definitions
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Value lookup
    pub fn values(&self) -> &V {
        &self.values
    }

    /// Message catalog
    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    /// Errors recorded by the last successful pass
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Run a validation pass and report whether every field is valid.
    ///
    /// Each successful pass replaces the previous errors. When the pass
    /// aborts, the previous errors are kept as they were.
    pub fn validate_form(&mut self) -> Result<bool, FormError> {
        self.errors = validate(&self.fields, &self.values, &self.messages)?;
        Ok(self.errors.is_empty())
    }

    /// `true` when the last pass recorded no errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Give back the definitions and values
    pub fn into_parts(self) -> (Vec<Field>, V) {
        (self.fields, self.values)
    }
}
