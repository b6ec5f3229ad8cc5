//! Built-in rule variants.
//!
//! Each variant is a thin instance of the [`Rule`](crate::foundation::Rule)
//! contract: a state struct, a default-template pair, and a predicate. The
//! shared protocol lives on the trait; nothing here duplicates it.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//! use serde_json::json;
//!
//! let mut name = required().with_option("label", "Name");
//! let mut code = pattern("^[0-9]{4}$").with_option("label", "Code");
//!
//! assert!(name.validate(&json!("Ada"), Some("name")));
//! assert!(!code.validate(&json!("12"), Some("code")));
//! ```

pub mod length;
pub mod pattern;
pub mod required;
pub mod same_as;

pub use length::{MaxLength, MinLength, max_length, min_length};
pub use pattern::{Pattern, pattern};
pub use required::{Required, required};
pub use same_as::{SameAs, same_as};
