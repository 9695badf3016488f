// formcheck - rule-chain form validation
//
// Validates named input values against ordered, short-circuiting chains of
// built-in rules and reports one message per failing field.

// Re-export the validation engine
pub use formcheck_validation::*;

// Re-export optional crates
#[cfg(feature = "log")]
pub use formcheck_log as log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Field, FieldErrors, FormError, FormSchema, FormValidator, Locale, MessageCatalog, Rule,
        RuleKind, ValueSource,
    };
}
