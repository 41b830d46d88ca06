//! Dotted-path search queries
//!
//! A query has the form `k1.k2...kn=v`: the left side of the FIRST `=` is
//! a dotted key path, the right side is the target value. Matching walks
//! the record viewed as the mapping `{"name": ..., "metadata": ...}`, so
//! the first path segment may be `name` or `metadata`.

use crate::entities::Config;
use crate::error::{Error, Result};
use serde_json::Value;

/// Value Object: Parsed Dotted-Path Query
///
/// Selects records by descending through nested mapping keys and comparing
/// the stringified value at the end of the path, case-insensitively,
/// against the target.
///
/// ## Matching Rules
///
/// - At each segment, descent only happens when the current value is a
///   JSON object containing that key; anything else (including arrays,
///   which are not key-addressable here) is a miss, never an error.
/// - At the last segment the found value is stringified: strings compare
///   by their contents, everything else by its compact JSON rendering.
/// - Comparison is case-insensitive on both sides.
///
/// ## Example
///
/// ```rust
/// use cfs_domain::{Config, SearchQuery};
/// use serde_json::json;
///
/// let config = Config::new(
///     "svc1",
///     json!({"env": {"region": "us"}}).as_object().unwrap().clone(),
/// );
/// let query = SearchQuery::parse("metadata.env.region=US").unwrap();
/// assert!(query.matches(&config));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    path: Vec<String>,
    target: String,
}

impl SearchQuery {
    /// Parse a raw query string of the form `k1.k2...kn=v`
    ///
    /// Splits on the first `=` only, so the target value may itself
    /// contain `=`. A query without `=`, or with an empty key path, is a
    /// [`Error::Validation`].
    pub fn parse(query: &str) -> Result<Self> {
        let Some((path_part, target)) = query.split_once('=') else {
            return Err(Error::validation(format!(
                "Query '{query}' is missing '=' (expected key1.key2...=value)"
            )));
        };

        if path_part.is_empty() {
            return Err(Error::validation("Query key path is empty"));
        }

        let path: Vec<String> = path_part.split('.').map(str::to_string).collect();
        if path.iter().any(String::is_empty) {
            return Err(Error::validation(format!(
                "Query key path '{path_part}' contains an empty segment"
            )));
        }

        Ok(Self {
            raw: query.to_string(),
            path,
            target: target.to_string(),
        })
    }

    /// The raw query string this was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the record matches this query
    pub fn matches(&self, config: &Config) -> bool {
        let Some((head, tail)) = self.path.split_first() else {
            return false;
        };

        // Top-level view of the record as a mapping: only "name" and
        // "metadata" exist at the root.
        match head.as_str() {
            "name" => tail.is_empty() && self.target_equals(&config.name),
            "metadata" => match tail.split_first() {
                None => {
                    let rendered =
                        serde_json::to_string(&config.metadata).unwrap_or_default();
                    self.target_equals(&rendered)
                }
                Some((key, rest)) => config
                    .metadata
                    .get(key)
                    .and_then(|value| descend(value, rest))
                    .is_some_and(|value| self.target_equals(&value_text(value))),
            },
            _ => false,
        }
    }

    fn target_equals(&self, text: &str) -> bool {
        text.to_lowercase() == self.target.to_lowercase()
    }
}

/// Walk a path through nested JSON objects
///
/// Returns the value at the end of the path, or `None` as soon as a
/// segment is absent or the current value is not an object.
fn descend<'a>(mut value: &'a Value, path: &[String]) -> Option<&'a Value> {
    for segment in path {
        match value {
            Value::Object(map) => value = map.get(segment)?,
            _ => return None,
        }
    }
    Some(value)
}

/// Stringify a JSON value for comparison
///
/// Strings compare by their contents (no surrounding quotes); every other
/// value compares by its compact JSON rendering.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
