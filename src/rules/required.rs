//! The required-field rule.

use serde_json::Value;

use crate::foundation::{InvalidConfiguration, OptionsSource, Rule, RuleState};

/// Fails only for the absence marker (`null`) and the empty string.
///
/// Everything else passes, including `0` and `false`: zero is a value like
/// any other. Options never affect the predicate; `label` and friends are
/// message decoration only.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let mut rule = required();
/// assert!(!rule.validate(&json!(null), None));
/// assert!(rule.validate(&json!(0), None));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Required {
    state: RuleState,
}

impl Required {
    /// Creates the rule with no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the rule from a configuration payload.
    pub fn with_options(options: impl Into<OptionsSource>) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            state: RuleState::from_source(options)?,
        })
    }
}

impl Rule for Required {
    fn kind(&self) -> &'static str {
        "required"
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RuleState {
        &mut self.state
    }

    fn generic_template(&self) -> &'static str {
        "This field is required"
    }

    fn labeled_template(&self) -> &'static str {
        "{label} is required"
    }

    fn check(&self, value: &Value, _identifier: Option<&str>) -> bool {
        !value.is_null() && value.as_str() != Some("")
    }
}

/// Creates a [`Required`] rule.
#[must_use]
pub fn required() -> Required {
    Required::new()
}
