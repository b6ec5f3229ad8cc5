//! Templated error messages.
//!
//! [`ErrorMessage`] is a small value object: a template string with `{name}`
//! placeholders plus a map of named variables. Rules hold one instance as a
//! prototype and clone it per failed validation, so a localization layer can
//! swap in a translated prototype without touching rule logic.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches `{name}` placeholders; names are letters, digits, underscores.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern compiles"));

// ============================================================================
// MESSAGE CONTRACT
// ============================================================================

/// Contract a message object must satisfy.
///
/// Rules build messages by cloning a prototype through this trait, so a
/// localization backend can substitute its own implementation (for example
/// one whose [`render`](Self::render) maps the template through a
/// translation catalog first) and intercept every message a rule produces
/// without the rule noticing.
pub trait Message {
    /// Replaces the template.
    fn set_template(&mut self, template: &str);

    /// Inserts or overwrites a named variable.
    fn set_variable(&mut self, name: &str, value: &str);

    /// Produces the human-readable text.
    fn render(&self) -> String;

    /// Clones the message behind the trait object.
    ///
    /// The clone must own an independent variable map: variables set on it
    /// must never reach the original.
    fn boxed_clone(&self) -> Box<dyn Message>;
}

// ============================================================================
// ERROR MESSAGE
// ============================================================================

/// A rendered-ready error message: template plus named variables.
///
/// Substitution happens lazily in [`render`](Self::render); placeholders
/// with no matching variable are left literal rather than treated as an
/// error. Cloning yields an independent variable map (owned strings in an
/// owned map), which is what makes prototype-and-clone reuse safe: variables
/// set on one clone never leak into another, and the prototype itself stays
/// untouched.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::foundation::ErrorMessage;
///
/// let mut message = ErrorMessage::new("{label} must match {pattern}");
/// message.set_variables([("label", "Code"), ("pattern", "^[0-9]+$")]);
/// assert_eq!(message.render(), "Code must match ^[0-9]+$");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    template: String,
    variables: BTreeMap<String, String>,
}

impl ErrorMessage {
    /// Creates a message with the given template and no variables.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Replaces the template. Chainable.
    pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.template = template.into();
        self
    }

    /// Builder flavor of [`set_template`](Self::set_template).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Merges variables into the existing map, overwriting by name.
    pub fn set_variables<I, K, V>(&mut self, variables: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in variables {
            self.variables.insert(name.into(), value.into());
        }
        self
    }

    /// Inserts or overwrites a single variable.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Current template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Renders the template, substituting every `{name}` placeholder that
    /// has a matching variable. Unknown placeholders stay literal.
    #[must_use]
    pub fn render(&self) -> String {
        PLACEHOLDER
            .replace_all(&self.template, |caps: &regex::Captures<'_>| {
                match self.variables.get(&caps[1]) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Message for ErrorMessage {
    fn set_template(&mut self, template: &str) {
        self.template = template.to_owned();
    }

    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_owned(), value.to_owned());
    }

    fn render(&self) -> String {
        // The inherent renderer; the trait adds nothing on top.
        Self::render(self)
    }

    fn boxed_clone(&self) -> Box<dyn Message> {
        Box::new(self.clone())
    }
}

// ============================================================================
// TESTS
// ============================================================================
