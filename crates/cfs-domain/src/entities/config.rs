//! Configuration record entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entity: Configuration Record
///
/// One named unit of metadata stored by the service. The name is the
/// logical identifier but is NOT unique: duplicates are permitted, reads
/// and updates act on the first match in insertion order, and deletes
/// remove every match.
///
/// `metadata` is an arbitrary, arbitrarily nested tree of JSON values.
/// Unknown fields in the source JSON are ignored on deserialization; both
/// `name` and `metadata` are required.
///
/// ## Example
///
/// ```rust
/// use cfs_domain::Config;
///
/// let config: Config = serde_json::from_str(
///     r#"{"name": "billing", "metadata": {"env": {"region": "eu-west-1"}}}"#,
/// )
/// .unwrap();
/// assert_eq!(config.name, "billing");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Logical identifier of the record (not enforced unique)
    pub name: String,
    /// Arbitrary nested key/value metadata
    pub metadata: Map<String, Value>,
}

impl Config {
    /// Create a new configuration record
    pub fn new<S: Into<String>>(name: S, metadata: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }
}
