//! Rule-chain form validation
//!
//! Validates named input values against ordered chains of named rules and
//! records at most one message per failing field.
//!
//! # Examples
//!
//! ## Validating a form
//!
//! ```
//! use formcheck_validation::{Field, FormValidator};
//! use std::collections::HashMap;
//!
//! let fields = vec![
//!     Field::new("username", ["required", "username", "min_length=3"]),
//!     Field::new("email", ["required", "email"]),
//!     // Optional: an empty value skips every rule
//!     Field::new("age", ["intnumber", "greater_than=17"]),
//! ];
//!
//! let values = HashMap::from([
//!     ("username", "jo"),
//!     ("email", "jo@example.com"),
//!     ("age", ""),
//! ]);
//!
//! let mut validator = FormValidator::new(fields, values);
//! assert!(!validator.validate_form().unwrap());
//! assert_eq!(
//!     validator.errors().get("username"),
//!     Some("This field must be at least 3 characters in length")
//! );
//! assert_eq!(validator.errors().len(), 1);
//! ```
//!
//! ## Single rules
//!
//! ```
//! use formcheck_validation::{MessageCatalog, Rule};
//!
//! let rule: Rule = "exact_length=5".parse().unwrap();
//! let messages = MessageCatalog::english();
//!
//! assert!(rule.check("zip", "28001", &messages).is_ok());
//! assert!(rule.check("zip", "2800", &messages).is_err());
//! ```
//!
//! ## Rule expressions
//!
//! Expressions are `name` or `name=argument`; the argument is everything after
//! the first `=`. Built-in rules: `required`, `alphabetic`, `alphanumeric`,
//! `email`, `intnumber`, `equal_to=<text>`, `exact_length=<n>`,
//! `greater_than=<value>`, `less_than=<value>`, `min_length=<n>`,
//! `max_length=<n>`, `name`, `spanish_dni`, `username`.

mod errors;
mod evaluator;
mod field;
mod form;
mod messages;
mod rules;
mod schema;
mod token;
pub mod validators;

pub use errors::*;
pub use evaluator::*;
pub use field::*;
pub use form::*;
pub use messages::*;
pub use rules::*;
pub use schema::*;
pub use token::*;
