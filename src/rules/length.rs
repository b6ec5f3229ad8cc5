//! Character-count rules.
//!
//! Bounds are read from the `min` / `max` options at check time, so
//! reconfiguration through `set_option` is honored. Counts are in
//! characters, not bytes.

use serde_json::Value;

use crate::foundation::{InvalidConfiguration, OptionsSource, Rule, RuleState, display_value};

// Bounds configured through a query string arrive as strings; accept both.
fn numeric_option(state: &RuleState, name: &str) -> Option<u64> {
    match state.option(name)? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn char_count(value: &Value) -> u64 {
    display_value(value).chars().count() as u64
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Requires at least `min` characters; a no-op without a usable `min`
/// option.
#[derive(Debug, Clone, Default)]
pub struct MinLength {
    state: RuleState,
}

impl MinLength {
    /// Creates the rule with the given lower bound.
    #[must_use]
    pub fn new(min: u64) -> Self {
        Self::default().with_option("min", min)
    }

    /// Creates the rule from a configuration payload.
    pub fn with_options(options: impl Into<OptionsSource>) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            state: RuleState::from_source(options)?,
        })
    }
}

impl Rule for MinLength {
    fn kind(&self) -> &'static str {
        "min_length"
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RuleState {
        &mut self.state
    }

    fn generic_template(&self) -> &'static str {
        "This input must be at least {min} characters long"
    }

    fn labeled_template(&self) -> &'static str {
        "{label} must be at least {min} characters long"
    }

    fn check(&self, value: &Value, _identifier: Option<&str>) -> bool {
        numeric_option(&self.state, "min").is_none_or(|min| char_count(value) >= min)
    }
}

/// Creates a [`MinLength`] rule.
#[must_use]
pub fn min_length(min: u64) -> MinLength {
    MinLength::new(min)
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Allows at most `max` characters; a no-op without a usable `max` option.
#[derive(Debug, Clone, Default)]
pub struct MaxLength {
    state: RuleState,
}

impl MaxLength {
    /// Creates the rule with the given upper bound.
    #[must_use]
    pub fn new(max: u64) -> Self {
        Self::default().with_option("max", max)
    }

    /// Creates the rule from a configuration payload.
    pub fn with_options(options: impl Into<OptionsSource>) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            state: RuleState::from_source(options)?,
        })
    }
}

impl Rule for MaxLength {
    fn kind(&self) -> &'static str {
        "max_length"
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RuleState {
        &mut self.state
    }

    fn generic_template(&self) -> &'static str {
        "This input must be at most {max} characters long"
    }

    fn labeled_template(&self) -> &'static str {
        "{label} must be at most {max} characters long"
    }

    fn check(&self, value: &Value, _identifier: Option<&str>) -> bool {
        numeric_option(&self.state, "max").is_none_or(|max| char_count(value) <= max)
    }
}

/// Creates a [`MaxLength`] rule.
#[must_use]
pub fn max_length(max: u64) -> MaxLength {
    MaxLength::new(max)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn min_length_bounds() {
        let mut rule = min_length(3);
        assert!(rule.validate(&json!("abc"), None));
        assert!(!rule.validate(&json!("ab"), None));
    }

    #[test]
    fn max_length_bounds() {
        let mut rule = max_length(3);
        assert!(rule.validate(&json!("abc"), None));
        assert!(!rule.validate(&json!("abcd"), None));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut rule = max_length(2);
        assert!(rule.validate(&json!("éé"), None));
    }

    #[test]
    fn string_bounds_from_query_options_work() {
        let mut rule = MinLength::with_options(OptionsSource::query("min=3")).unwrap();
        assert!(!rule.validate(&json!("ab"), None));
        assert!(rule.validate(&json!("abc"), None));
    }

    #[test]
    fn without_a_bound_everything_passes() {
        let mut rule = MinLength::default();
        assert!(rule.validate(&json!(""), None));
    }

    #[test]
    fn null_counts_as_zero_characters() {
        let mut rule = min_length(1);
        assert!(!rule.validate(&json!(null), None));
        assert!(max_length(0).validate(&json!(null), None));
    }
}
