//! Pre-flight checks shared by endpoint bindings
//!
//! Every failure is a [`ConfigurationError`]; nothing here panics.

use crate::api::params::Params;
use crate::error::ConfigurationError;
use serde_json::{Map, Value};

/// Require each named parameter to be present and non-null, in order
pub fn require_params(params: &Params, required: &[&str]) -> Result<(), ConfigurationError> {
    for name in required {
        if !params.is_set(name) {
            return Err(ConfigurationError::new(format!(
                "Missing required parameter: {}",
                name
            )));
        }
    }
    Ok(())
}

/// Check the URL parts a `/{index}/{type}[/{id}]` path depends on
pub fn require_url_parts(params: &Params) -> Result<(), ConfigurationError> {
    if params.is_set("id") {
        if !params.is_set("type") || !params.is_set("index") {
            return Err(ConfigurationError::new(
                "Missing required parameter of the url: type, index",
            ));
        }
    } else if params.is_set("type") && !params.is_set("index") {
        return Err(ConfigurationError::new(
            "Missing required parameter of the url: index",
        ));
    }
    Ok(())
}

/// Name of a JSON value's kind as reported in error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Headers must be a key-value object; null counts as absent
pub fn validate_headers(
    headers: Option<&Value>,
) -> Result<Option<Map<String, Value>>, ConfigurationError> {
    match headers {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map.clone())),
        Some(other) => Err(ConfigurationError::new(format!(
            "Headers should be an object, instead got: {}",
            type_name(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_params_reports_first_missing() {
        let params = Params::new().with("type", "_doc");
        let err = require_params(&params, &["index", "type"]).unwrap_err();
        assert_eq!(err.message(), "Missing required parameter: index");

        let params = Params::new().with("index", "tweets").with("type", Value::Null);
        let err = require_params(&params, &["index", "type"]).unwrap_err();
        assert_eq!(err.message(), "Missing required parameter: type");

        let params = Params::new().with("index", "tweets").with("type", "_doc");
        assert!(require_params(&params, &["index", "type"]).is_ok());
    }

    #[test]
    fn test_require_url_parts() {
        let params = Params::new().with("id", "1").with("index", "tweets");
        assert_eq!(
            require_url_parts(&params).unwrap_err().message(),
            "Missing required parameter of the url: type, index"
        );

        let params = Params::new().with("type", "_doc");
        assert_eq!(
            require_url_parts(&params).unwrap_err().message(),
            "Missing required parameter of the url: index"
        );

        let params = Params::new()
            .with("index", "tweets")
            .with("type", "_doc")
            .with("id", "1");
        assert!(require_url_parts(&params).is_ok());
        assert!(require_url_parts(&Params::new()).is_ok());
    }

    #[test]
    fn test_validate_headers_accepts_objects() {
        assert_eq!(validate_headers(None), Ok(None));
        assert_eq!(validate_headers(Some(&Value::Null)), Ok(None));
        let headers = validate_headers(Some(&json!({"x-opaque-id": "abc"})))
            .expect("object headers should pass")
            .expect("headers should be kept");
        assert_eq!(headers.get("x-opaque-id"), Some(&json!("abc")));
    }

    #[test]
    fn test_validate_headers_rejects_primitives() {
        let cases = [
            (json!("x"), "string"),
            (json!(1), "number"),
            (json!(true), "boolean"),
            (json!(["a", "b"]), "array"),
        ];
        for (value, kind) in cases {
            let err = validate_headers(Some(&value)).unwrap_err();
            assert_eq!(
                err.message(),
                format!("Headers should be an object, instead got: {}", kind)
            );
        }
    }
}
