//! Caller-facing inputs of an endpoint binding
//!
//! [`Params`] keeps insertion order so that unknown-parameter warnings come
//! out in the order the caller supplied the keys.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Named request parameters, in insertion order.
///
/// A key mapped to `Value::Null` counts as absent for every check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(IndexMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Present and not null
    pub fn is_set(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|value| !value.is_null())
    }

    /// The value when present and not null
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// HTTP status codes the dispatcher should not treat as errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ignore {
    Status(u16),
    Statuses(Vec<u16>),
}

impl Ignore {
    pub fn into_statuses(self) -> Vec<u16> {
        match self {
            Ignore::Status(status) => vec![status],
            Ignore::Statuses(statuses) => statuses,
        }
    }
}

impl From<u16> for Ignore {
    fn from(status: u16) -> Self {
        Ignore::Status(status)
    }
}

impl From<Vec<u16>> for Ignore {
    fn from(statuses: Vec<u16>) -> Self {
        Ignore::Statuses(statuses)
    }
}

/// Per-call transport options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Extra request headers; must be a JSON object when set
    pub headers: Option<Value>,
    pub ignore: Option<Ignore>,
    pub request_timeout: Option<Duration>,
    pub max_retries: Option<u32>,
    pub as_stream: bool,
    /// Raw query-string entries forwarded to the dispatcher as-is
    pub querystring: Option<IndexMap<String, Value>>,
    pub compression: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_null_counts_as_absent() {
        let params = Params::new().with("index", "tweets").with("id", Value::Null);
        assert!(params.is_set("index"));
        assert!(!params.is_set("id"));
        assert!(!params.is_set("type"));
        assert!(params.value("id").is_none());
        assert_eq!(params.get("id"), Some(&Value::Null));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_params_keep_insertion_order() {
        let params: Params = vec![("zeta", json!(1)), ("alpha", json!(2)), ("mid", json!(3))]
            .into_iter()
            .collect();
        let keys: Vec<&str> = params.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_params_deserialize_from_json_object() {
        let params: Params =
            serde_json::from_value(json!({"index": "tweets", "type": "_doc", "pretty": true}))
                .expect("deserialize failed");
        assert!(params.is_set("type"));
        assert_eq!(params.get("pretty"), Some(&json!(true)));
    }

    #[test]
    fn test_ignore_into_statuses() {
        assert_eq!(Ignore::from(404).into_statuses(), vec![404]);
        assert_eq!(Ignore::from(vec![404, 409]).into_statuses(), vec![404, 409]);
    }

    #[test]
    fn test_ignore_deserialize_untagged() {
        let single: Ignore = serde_json::from_value(json!(404)).expect("deserialize failed");
        assert_eq!(single, Ignore::Status(404));
        let many: Ignore = serde_json::from_value(json!([404, 409])).expect("deserialize failed");
        assert_eq!(many, Ignore::Statuses(vec![404, 409]));
    }

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert!(options.headers.is_none());
        assert!(options.ignore.is_none());
        assert!(!options.as_stream);
        assert!(!options.compression);
    }
}
