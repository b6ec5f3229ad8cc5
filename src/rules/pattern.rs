//! The regular-expression rule.

use regex::Regex;
use serde_json::Value;

use crate::foundation::{InvalidConfiguration, OptionsSource, Rule, RuleState, display_value};

/// Succeeds iff the configured `pattern` option matches the value.
///
/// The pattern string is opaque to the rule: anchoring and inline flags
/// such as `(?i)` belong to the caller. The match is a containment test
/// (`Regex::is_match`) against the value's string form, not sub-match
/// extraction. Without a `pattern` option the rule is a no-op and passes
/// everything.
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    state: RuleState,
}

impl Pattern {
    /// Creates the rule with the given pattern.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::default().with_option("pattern", pattern.into())
    }

    /// Creates the rule from a configuration payload.
    pub fn with_options(options: impl Into<OptionsSource>) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            state: RuleState::from_source(options)?,
        })
    }
}

impl Rule for Pattern {
    fn kind(&self) -> &'static str {
        "pattern"
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RuleState {
        &mut self.state
    }

    fn generic_template(&self) -> &'static str {
        "This input does not match the regular expression {pattern}"
    }

    fn labeled_template(&self) -> &'static str {
        "{label} does not match the regular expression {pattern}"
    }

    fn check(&self, value: &Value, _identifier: Option<&str>) -> bool {
        let Some(option) = self.state.option("pattern") else {
            return true;
        };
        // The pattern may be reconfigured between runs, so it compiles at
        // check time; a pattern that does not compile fails the check.
        match Regex::new(&display_value(option)) {
            Ok(regex) => regex.is_match(&display_value(value)),
            Err(error) => {
                tracing::warn!(rule = "pattern", %error, "configured pattern does not compile");
                false
            }
        }
    }
}

/// Creates a [`Pattern`] rule.
#[must_use]
pub fn pattern(pattern: impl Into<String>) -> Pattern {
    Pattern::new(pattern)
}
