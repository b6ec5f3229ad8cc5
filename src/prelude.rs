//! Prelude module for convenient imports.
//!
//! A single `use fieldcheck::prelude::*;` brings in the rule contract, the
//! message and configuration types, and every built-in rule with its
//! factory function.

// ============================================================================
// FOUNDATION: contract, messages, configuration
// ============================================================================

pub use crate::foundation::{
    ContextLookup, ContextSource, ErrorMessage, InvalidConfiguration, MapContext, Message,
    OptionsSource, Rule, RuleOptions, RuleState, display_value,
};

// ============================================================================
// RULES: built-in variants and factories
// ============================================================================

pub use crate::rules::{
    MaxLength, MinLength, Pattern, Required, SameAs, max_length, min_length, pattern, required,
    same_as,
};
