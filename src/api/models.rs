use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

/// Custom serializer: durations go over the wire as whole milliseconds
fn serialize_duration_ms<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(duration) => serializer.serialize_u64(duration.as_millis() as u64),
        None => serializer.serialize_none(),
    }
}

/// HTTP method of a dispatched request.
///
/// Caller-supplied methods outside the named set are carried verbatim in
/// `Other`, case included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Other(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Method {
    fn from(raw: &str) -> Self {
        match raw {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "HEAD" => Method::Head,
            other => Method::Other(other.to_string()),
        }
    }
}

impl Serialize for Method {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// The request handed to a dispatcher
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    pub method: Method,
    pub path: String,
    /// Request body, or an empty string when none was given
    pub body: Value,
    pub querystring: IndexMap<String, Value>,
}

/// Per-request settings handed to a dispatcher alongside the [`Request`]
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RequestOptions {
    pub ignore: Option<Vec<u16>>,
    #[serde(serialize_with = "serialize_duration_ms")]
    pub request_timeout: Option<Duration>,
    pub max_retries: Option<u32>,
    pub as_stream: bool,
    pub headers: Option<Map<String, Value>>,
    pub querystring: Option<IndexMap<String, Value>>,
    pub compression: bool,
    pub warnings: Option<Vec<String>>,
}

/// Result value delivered to callbacks.
///
/// `ApiResponse::default()` is the empty result that accompanies
/// configuration errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    pub body: Option<Value>,
    pub status_code: Option<u16>,
    pub headers: Option<IndexMap<String, String>>,
    pub warnings: Option<Vec<String>>,
}
