//! The rule contract.
//!
//! A rule couples one validation predicate with the state needed to explain
//! a failure: configuration options, the outcome and value of the last run,
//! an optional cross-field context, and a message prototype. The [`Rule`]
//! trait provides the whole run/report protocol; a variant supplies its
//! identity, a default-template pair, and the predicate.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::context::{ContextLookup, ContextSource};
use crate::foundation::error::InvalidConfiguration;
use crate::foundation::message::{ErrorMessage, Message};
use crate::foundation::options::{OptionsSource, RuleOptions, display_value};

// ============================================================================
// RULE STATE
// ============================================================================

/// Mutable state shared by every rule variant.
///
/// One instance serves one (field, value) check at a time: `validate`
/// mutates state that message generation subsequently reads, so reuse
/// across fields or values must be strictly sequential.
#[derive(Clone)]
pub struct RuleState {
    options: RuleOptions,
    template_override: Option<String>,
    passed: bool,
    last_value: Option<Value>,
    context: Option<Arc<dyn ContextLookup>>,
    prototype: Arc<dyn Message>,
}

impl Default for RuleState {
    fn default() -> Self {
        Self {
            options: RuleOptions::new(),
            template_override: None,
            passed: false,
            last_value: None,
            context: None,
            prototype: Arc::new(ErrorMessage::default()),
        }
    }
}

impl RuleState {
    /// Creates empty state: no options, no context, stock prototype, and a
    /// last outcome of `false`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates state from a configuration payload.
    pub fn from_source(source: impl Into<OptionsSource>) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            options: source.into().normalize()?,
            ..Self::default()
        })
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    /// Looks up a single option by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Outcome of the most recent `validate` call; `false` before any call.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Value passed to the most recent `validate` call.
    ///
    /// Consulted only for message rendering, never for predicate logic.
    #[must_use]
    pub fn last_value(&self) -> Option<&Value> {
        self.last_value.as_ref()
    }

    /// The installed cross-field context, if any.
    #[must_use]
    pub fn context(&self) -> Option<&dyn ContextLookup> {
        self.context.as_deref()
    }

    /// The message prototype rules clone from.
    #[must_use]
    pub fn prototype(&self) -> &dyn Message {
        self.prototype.as_ref()
    }

    fn record(&mut self, value: Value, passed: bool) {
        self.last_value = Some(value);
        self.passed = passed;
    }
}

impl fmt::Debug for RuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleState")
            .field("options", &self.options)
            .field("template_override", &self.template_override)
            .field("passed", &self.passed)
            .field("last_value", &self.last_value)
            .field("context", &self.context.as_ref().map(|_| "<lookup>"))
            .field("prototype", &"<message>")
            .finish()
    }
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// The contract every rule variant implements.
///
/// Variants supply the required methods; everything else is provided and
/// identical across variants. The protocol-facing surface (`validate`,
/// `message`, `potential_message`, `unique_id`) is object safe, so an
/// orchestration layer can hold rules as `Box<dyn Rule>`.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let mut rule = required().with_option("label", "Name");
/// assert!(!rule.validate(&json!(""), Some("name")));
/// assert_eq!(rule.message().unwrap().render(), "Name is required");
/// ```
pub trait Rule {
    /// Stable variant identity, e.g. `"required"`.
    fn kind(&self) -> &'static str;

    /// Shared state of this instance.
    fn state(&self) -> &RuleState;

    /// Mutable shared state of this instance.
    fn state_mut(&mut self) -> &mut RuleState;

    /// Default message template used when no `label` option is set.
    fn generic_template(&self) -> &'static str;

    /// Default message template used when a `label` option is set; normally
    /// references `{label}`.
    fn labeled_template(&self) -> &'static str;

    /// The predicate: decides the value without touching state.
    ///
    /// Options and context are read through [`state`](Self::state).
    /// `identifier` is the field-name hint forwarded from `validate`; most
    /// variants ignore it.
    fn check(&self, value: &Value, identifier: Option<&str>) -> bool;

    // ------------------------------------------------------------------
    // Provided protocol
    // ------------------------------------------------------------------

    /// Runs the predicate, records the tested value and the outcome, and
    /// returns the outcome.
    ///
    /// After this returns, the recorded outcome reflects exactly this run,
    /// not any earlier one. A failed run is an ordinary result, never an
    /// error.
    fn validate(&mut self, value: &Value, identifier: Option<&str>) -> bool {
        let passed = self.check(value, identifier);
        tracing::trace!(rule = self.kind(), passed, "validated value");
        self.state_mut().record(value.clone(), passed);
        passed
    }

    /// Inserts or overwrites a configuration option. Chainable.
    ///
    /// Every option doubles as a message-template variable, so option names
    /// meant for internal use must be chosen to avoid placeholder
    /// collisions.
    fn set_option(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self
    where
        Self: Sized,
    {
        self.state_mut().options.insert(name.into(), value.into());
        self
    }

    /// Consuming flavor of [`set_option`](Self::set_option) for
    /// construction chains.
    #[must_use = "builder methods must be chained or built"]
    fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        self.set_option(name, value);
        self
    }

    /// Installs a cross-field context. Chainable.
    ///
    /// [`ContextSource::Unchanged`] (or `None`) is a no-op that leaves any
    /// previously installed context in place.
    fn set_context(&mut self, context: impl Into<ContextSource>) -> &mut Self
    where
        Self: Sized,
    {
        if let Some(lookup) = context.into().into_lookup() {
            self.state_mut().context = Some(lookup);
        }
        self
    }

    /// Stores a template override for this instance. Chainable.
    fn set_message_template(&mut self, template: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.state_mut().template_override = Some(template.into());
        self
    }

    /// Swaps the message prototype. Chainable.
    ///
    /// This is the localization hook: a translation layer provides a
    /// prototype with the same template/variables/render contract and every
    /// message this rule builds goes through it.
    fn set_message_prototype(&mut self, prototype: Arc<dyn Message>) -> &mut Self
    where
        Self: Sized,
    {
        self.state_mut().prototype = prototype;
        self
    }

    /// Resolves the message template.
    ///
    /// An instance override wins; otherwise the labeled default applies
    /// when a `label` option is present, else the generic default.
    fn message_template(&self) -> &str {
        if let Some(template) = self.state().template_override.as_deref() {
            template
        } else if self.state().options.contains_key("label") {
            self.labeled_template()
        } else {
            self.generic_template()
        }
    }

    /// Builds the failure message for the last run, or `None` if it passed.
    ///
    /// On top of [`potential_message`](Self::potential_message), the tested
    /// value is layered in as the `value` variable once a run has recorded
    /// one.
    fn message(&self) -> Option<Box<dyn Message>> {
        let state = self.state();
        if state.passed {
            return None;
        }
        let mut message = self.potential_message();
        if let Some(value) = state.last_value() {
            message.set_variable("value", &display_value(value));
        }
        Some(message)
    }

    /// Builds a rendered-ready message regardless of the last outcome.
    ///
    /// For preview scenarios where no failure has occurred yet: clones the
    /// prototype, assigns the resolved template, and exposes every current
    /// option as a variable.
    fn potential_message(&self) -> Box<dyn Message> {
        let state = self.state();
        let mut message = state.prototype.boxed_clone();
        message.set_template(self.message_template());
        for (name, value) in &state.options {
            message.set_variable(name, &display_value(value));
        }
        message
    }

    /// Stable identity for duplicate detection.
    ///
    /// Combines the variant kind with a canonical encoding of the options:
    /// equal option sets produce equal ids regardless of insertion order,
    /// and any differing option value changes the id.
    fn unique_id(&self) -> String {
        let options = serde_json::to_string(&self.state().options)
            .expect("an options map always serializes to JSON");
        format!("{}:{}", self.kind(), options)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // Minimal variant: passes anything that is not null.
    #[derive(Default)]
    struct NotNull {
        state: RuleState,
    }

    impl Rule for NotNull {
        fn kind(&self) -> &'static str {
            "not_null"
        }

        fn state(&self) -> &RuleState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut RuleState {
            &mut self.state
        }

        fn generic_template(&self) -> &'static str {
            "This field must not be null"
        }

        fn labeled_template(&self) -> &'static str {
            "{label} must not be null"
        }

        fn check(&self, value: &Value, _identifier: Option<&str>) -> bool {
            !value.is_null()
        }
    }

    // Variant that rejects everything, for message-side tests.
    #[derive(Default)]
    struct Rejects {
        state: RuleState,
    }

    impl Rule for Rejects {
        fn kind(&self) -> &'static str {
            "rejects"
        }

        fn state(&self) -> &RuleState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut RuleState {
            &mut self.state
        }

        fn generic_template(&self) -> &'static str {
            "No"
        }

        fn labeled_template(&self) -> &'static str {
            "No, {label}"
        }

        fn check(&self, _value: &Value, _identifier: Option<&str>) -> bool {
            false
        }
    }

    #[test]
    fn validate_records_outcome_and_value() {
        let mut rule = NotNull::default();
        assert!(!rule.state().passed());

        assert!(rule.validate(&json!("x"), None));
        assert!(rule.state().passed());
        assert_eq!(rule.state().last_value(), Some(&json!("x")));

        assert!(!rule.validate(&json!(null), None));
        assert!(!rule.state().passed());
        assert_eq!(rule.state().last_value(), Some(&json!(null)));
    }

    #[test]
    fn message_is_absent_after_a_passing_run() {
        let mut rule = NotNull::default();
        rule.validate(&json!(1), None);
        assert!(rule.message().is_none());
    }

    #[test]
    fn message_layers_the_tested_value() {
        let mut rule = Rejects::default();
        rule.set_message_template("got {value}");
        rule.validate(&json!("12a"), Some("code"));
        assert_eq!(rule.message().unwrap().render(), "got 12a");

        // Null stringifies to the empty string.
        rule.validate(&json!(null), None);
        assert_eq!(rule.message().unwrap().render(), "got ");
    }

    #[test]
    fn message_before_any_run_leaves_value_literal() {
        let mut rule = Rejects::default();
        rule.set_message_template("got {value}");
        assert_eq!(rule.message().unwrap().render(), "got {value}");
    }

    #[test]
    fn template_resolution_prefers_override_then_label() {
        let mut rule = NotNull::default();
        assert_eq!(rule.message_template(), "This field must not be null");

        rule.set_option("label", "Age");
        assert_eq!(rule.message_template(), "{label} must not be null");

        rule.set_message_template("custom");
        assert_eq!(rule.message_template(), "custom");
    }

    #[test]
    fn potential_message_is_independent_of_outcome() {
        let mut rule = NotNull::default();
        rule.set_option("label", "Age");

        // Never validated: still renders.
        assert_eq!(rule.potential_message().render(), "Age must not be null");

        rule.validate(&json!(5), None);
        assert_eq!(rule.potential_message().render(), "Age must not be null");
    }

    #[test]
    fn prototype_variables_survive_into_built_messages() {
        let mut prototype = ErrorMessage::new("replaced anyway");
        prototype.set_variable("app", "demo");

        let mut rule = Rejects::default();
        rule.set_message_prototype(Arc::new(prototype));
        rule.set_message_template("{app}: {value}");
        rule.validate(&json!("x"), None);

        // The resolved template replaces the prototype's, but variables set
        // on the prototype survive the clone.
        assert_eq!(rule.message().unwrap().render(), "demo: x");
    }

    #[test]
    fn unique_id_is_order_independent_and_value_sensitive() {
        let mut first = NotNull::default();
        first.set_option("a", json!(1)).set_option("b", json!(2));

        let mut second = NotNull::default();
        second.set_option("b", json!(2)).set_option("a", json!(1));

        assert_eq!(first.unique_id(), second.unique_id());

        second.set_option("a", json!(9));
        assert_ne!(first.unique_id(), second.unique_id());
    }

    #[test]
    fn rules_are_object_safe() {
        let mut rules: Vec<Box<dyn Rule>> = vec![Box::new(NotNull::default())];
        for rule in &mut rules {
            assert!(!rule.validate(&json!(null), None));
            assert!(rule.message().is_some());
            assert_eq!(rule.unique_id(), "not_null:{}");
        }
    }

    #[test]
    fn set_context_with_absent_input_is_a_no_op() {
        let mut rule = NotNull::default();
        let context = crate::foundation::MapContext::new().with_value("other", json!(1));
        rule.set_context(context);
        assert!(rule.state().context().is_some());

        rule.set_context(None::<ContextSource>);
        assert!(rule.state().context().is_some());
        assert_eq!(
            rule.state().context().unwrap().lookup("other"),
            Some(json!(1)),
        );
    }
}
