//! Rule configuration payloads.
//!
//! Rules accept configuration in three equivalent shapes: a ready-made
//! mapping, a JSON object string, or a query string. [`OptionsSource`] names
//! the shape explicitly and [`normalize`](OptionsSource::normalize) folds
//! all three into one canonical mapping. An empty payload of any shape is
//! valid and normalizes to the empty mapping.

use std::collections::BTreeMap;

use serde_json::Value;
use url::form_urlencoded;

use crate::foundation::error::InvalidConfiguration;

/// Canonical option storage: unique names, deterministic order.
pub type RuleOptions = BTreeMap<String, Value>;

// ============================================================================
// OPTIONS SOURCE
// ============================================================================

/// A configuration payload in one of the accepted shapes.
///
/// The shape is an explicit tag chosen by the caller, never sniffed from
/// the payload at runtime.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::foundation::OptionsSource;
///
/// let from_json = OptionsSource::json(r#"{"pattern": "^a"}"#);
/// let from_query = OptionsSource::query("label=Name&min=3");
/// assert_eq!(
///     from_json.normalize().unwrap()["pattern"],
///     serde_json::json!("^a"),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub enum OptionsSource {
    /// No options at all; normalizes to the empty mapping.
    #[default]
    Empty,
    /// A mapping already keyed by option name; used as-is.
    Map(RuleOptions),
    /// A JSON-encoded object, e.g. `{"pattern": "^a"}`.
    Json(String),
    /// `application/x-www-form-urlencoded` pairs, e.g. `label=Name&min=3`.
    Query(String),
}

impl OptionsSource {
    /// Tags a string as JSON-encoded options.
    pub fn json(payload: impl Into<String>) -> Self {
        Self::Json(payload.into())
    }

    /// Tags a string as query-string-encoded options.
    pub fn query(payload: impl Into<String>) -> Self {
        Self::Query(payload.into())
    }

    /// Folds the payload into the canonical mapping.
    ///
    /// Malformed payloads fail with [`InvalidConfiguration`]: JSON that does
    /// not parse, JSON that parses to a non-object, or a query-string pair
    /// with an empty name.
    pub fn normalize(self) -> Result<RuleOptions, InvalidConfiguration> {
        match self {
            Self::Empty => Ok(RuleOptions::new()),
            Self::Map(options) => Ok(options),
            Self::Json(payload) => normalize_json(&payload),
            Self::Query(payload) => normalize_query(&payload),
        }
    }
}

impl From<RuleOptions> for OptionsSource {
    fn from(options: RuleOptions) -> Self {
        Self::Map(options)
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Value); N]> for OptionsSource {
    fn from(pairs: [(K, Value); N]) -> Self {
        Self::Map(pairs.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}

fn normalize_json(payload: &str) -> Result<RuleOptions, InvalidConfiguration> {
    if payload.trim().is_empty() {
        return Ok(RuleOptions::new());
    }
    match serde_json::from_str::<Value>(payload)? {
        Value::Object(object) => Ok(object.into_iter().collect()),
        other => Err(InvalidConfiguration::JsonNotAnObject {
            found: json_type_name(&other),
        }),
    }
}

fn normalize_query(payload: &str) -> Result<RuleOptions, InvalidConfiguration> {
    let mut options = RuleOptions::new();
    for (name, value) in form_urlencoded::parse(payload.as_bytes()) {
        if name.is_empty() {
            return Err(InvalidConfiguration::EmptyOptionName {
                pair: format!("={value}"),
            });
        }
        // Query values are untyped; they arrive as strings. Last pair wins
        // on duplicate names.
        options.insert(name.into_owned(), Value::String(value.into_owned()));
    }
    Ok(options)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// VALUE STRINGIFICATION
// ============================================================================

/// Stringifies a value for use as a message-template variable.
///
/// Strings render verbatim (no surrounding quotes), `null` renders as the
/// empty string, and compound values render as compact JSON.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        compound => serde_json::to_string(compound).expect("JSON values always serialize"),
    }
}

// ============================================================================
// TESTS
// ============================================================================
