//! The sibling-equality rule.

use serde_json::Value;

use crate::foundation::{InvalidConfiguration, OptionsSource, Rule, RuleState};

/// Succeeds iff the value equals the sibling field named by the `other`
/// option, fetched through the injected context.
///
/// This is the context-aware variant: install a context with
/// [`set_context`](Rule::set_context) before validating. Without an `other`
/// option the rule is a no-op. With an `other` option but no reachable
/// sibling (no context installed, or the context has no such field) the
/// match cannot be confirmed and the check fails.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let mut confirm = same_as("password").with_option("label", "Confirmation");
/// confirm.set_context(MapContext::new().with_value("password", json!("s3cret")));
///
/// assert!(confirm.validate(&json!("s3cret"), Some("password_confirm")));
/// assert!(!confirm.validate(&json!("typo"), Some("password_confirm")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SameAs {
    state: RuleState,
}

impl SameAs {
    /// Creates the rule comparing against the named sibling field.
    #[must_use]
    pub fn new(other: impl Into<String>) -> Self {
        Self::default().with_option("other", other.into())
    }

    /// Creates the rule from a configuration payload.
    pub fn with_options(options: impl Into<OptionsSource>) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            state: RuleState::from_source(options)?,
        })
    }
}

impl Rule for SameAs {
    fn kind(&self) -> &'static str {
        "same_as"
    }

    fn state(&self) -> &RuleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RuleState {
        &mut self.state
    }

    fn generic_template(&self) -> &'static str {
        "This value must match the {other} field"
    }

    fn labeled_template(&self) -> &'static str {
        "{label} must match the {other} field"
    }

    fn check(&self, value: &Value, _identifier: Option<&str>) -> bool {
        let Some(other) = self.state.option("other").and_then(Value::as_str) else {
            return true;
        };
        let Some(context) = self.state.context() else {
            return false;
        };
        context.lookup(other).is_some_and(|sibling| sibling == *value)
    }
}

/// Creates a [`SameAs`] rule.
#[must_use]
pub fn same_as(other: impl Into<String>) -> SameAs {
    SameAs::new(other)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::foundation::MapContext;

    fn context() -> MapContext {
        MapContext::new().with_value("password", json!("s3cret"))
    }

    #[test]
    fn matches_the_sibling_value() {
        let mut rule = same_as("password");
        rule.set_context(context());
        assert!(rule.validate(&json!("s3cret"), None));
        assert!(!rule.validate(&json!("typo"), None));
    }

    #[test]
    fn missing_sibling_fails() {
        let mut rule = same_as("nickname");
        rule.set_context(context());
        assert!(!rule.validate(&json!("anything"), None));
    }

    #[test]
    fn missing_context_fails() {
        let mut rule = same_as("password");
        assert!(!rule.validate(&json!("s3cret"), None));
    }

    #[test]
    fn without_an_other_option_everything_passes() {
        let mut rule = SameAs::default();
        assert!(rule.validate(&json!("anything"), None));
    }

    #[test]
    fn message_exposes_the_sibling_name() {
        let mut rule = same_as("password");
        rule.set_context(context());
        rule.validate(&json!("typo"), None);
        assert_eq!(
            rule.message().unwrap().render(),
            "This value must match the password field",
        );
    }
}
