//! # fieldcheck
//!
//! Pluggable value-validation rules with templated error messages.
//!
//! Each rule decides whether a single value satisfies one condition and
//! knows how to explain a failure: configuration options double as
//! message-template variables, and messages are cloned from a swappable
//! prototype so a localization layer can intercept them without touching
//! rule logic.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//! use serde_json::json;
//!
//! let mut code = pattern("^[0-9]+$").with_option("label", "Code");
//! assert!(!code.validate(&json!("12a"), None));
//!
//! let message = code.message().expect("failed runs carry a message");
//! assert_eq!(
//!     message.render(),
//!     "Code does not match the regular expression ^[0-9]+$",
//! );
//! ```
//!
//! ## Built-in rules
//!
//! - [`Required`](rules::Required): rejects `null` and the empty string
//! - [`Pattern`](rules::Pattern): regular-expression match
//! - [`MinLength`](rules::MinLength) / [`MaxLength`](rules::MaxLength):
//!   character-count bounds
//! - [`SameAs`](rules::SameAs): cross-field equality through an injected
//!   context
//!
//! Anything implementing [`Rule`](foundation::Rule) slots in alongside the
//! built-ins; the trait supplies the whole run/report protocol from an
//! identity, a default-template pair, and a predicate.

pub mod foundation;
pub mod prelude;
pub mod rules;
