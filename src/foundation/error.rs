//! Configuration-error taxonomy.
//!
//! Only configuration mistakes surface as errors here. A failed predicate
//! is an ordinary validation outcome, reported through the boolean return
//! of `validate` and the lazily built message, never as an `Err`.

use thiserror::Error;

/// Error raised when a rule is configured with a malformed payload.
///
/// Configuration errors indicate programmer error rather than bad input
/// data: they surface synchronously at the offending call and are never
/// retried or defaulted, apart from the documented empty-payload cases.
#[derive(Debug, Error)]
pub enum InvalidConfiguration {
    /// The JSON options payload failed to parse.
    #[error("options are not valid JSON")]
    MalformedJson(#[from] serde_json::Error),

    /// The JSON options payload parsed, but not to an object.
    #[error("JSON options must be an object, got {found}")]
    JsonNotAnObject {
        /// JSON type of the offending document.
        found: &'static str,
    },

    /// A query-string pair carried an empty option name.
    #[error("query-string options contain a pair with an empty name ({pair:?})")]
    EmptyOptionName {
        /// The offending pair, as received.
        pair: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_json_type() {
        let error = InvalidConfiguration::JsonNotAnObject { found: "an array" };
        assert_eq!(error.to_string(), "JSON options must be an object, got an array");
    }

    #[test]
    fn malformed_json_chains_the_source() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let error = InvalidConfiguration::from(source);
        assert!(std::error::Error::source(&error).is_some());
    }
}
