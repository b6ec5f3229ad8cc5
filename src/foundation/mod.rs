//! Core validation types and traits
//!
//! This module contains the building blocks every rule variant shares:
//!
//! - **Contract**: [`Rule`], [`RuleState`]
//! - **Messages**: [`Message`], [`ErrorMessage`]
//! - **Configuration**: [`OptionsSource`], [`InvalidConfiguration`]
//! - **Cross-field lookup**: [`ContextLookup`], [`MapContext`],
//!   [`ContextSource`]
//!
//! # Architecture
//!
//! A rule couples one predicate with the state needed to explain a failure.
//! The [`Rule`] trait provides the whole run/report protocol; a variant only
//! supplies its identity, a pair of default message templates, and the
//! predicate itself:
//!
//! ```rust,ignore
//! use fieldcheck::foundation::{Rule, RuleState};
//! use serde_json::Value;
//!
//! struct NotBlank { state: RuleState }
//!
//! impl Rule for NotBlank {
//!     fn kind(&self) -> &'static str { "not_blank" }
//!     fn state(&self) -> &RuleState { &self.state }
//!     fn state_mut(&mut self) -> &mut RuleState { &mut self.state }
//!     fn generic_template(&self) -> &'static str { "This field must not be blank" }
//!     fn labeled_template(&self) -> &'static str { "{label} must not be blank" }
//!
//!     fn check(&self, value: &Value, _identifier: Option<&str>) -> bool {
//!         value.as_str().is_none_or(|text| !text.trim().is_empty())
//!     }
//! }
//! ```
//!
//! Failure explanations are lazy: `validate` records the outcome and the
//! tested value, and a message is only built when the caller asks for one.
//! Messages are cloned from a per-rule prototype, which is the localization
//! seam: swap the prototype, keep the logic.

// Module declarations
pub mod context;
pub mod error;
pub mod message;
pub mod options;
pub mod rule;

// Re-export everything at the foundation level for convenience
pub use context::{ContextLookup, ContextSource, MapContext};
pub use error::InvalidConfiguration;
pub use message::{ErrorMessage, Message};
pub use options::{OptionsSource, RuleOptions, display_value};
pub use rule::{Rule, RuleState};
