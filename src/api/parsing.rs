//! Access into the Lambda Function URL event shape.
//!
//! Events arrive as loosely-typed JSON; the helpers here pull out the HTTP
//! method and body without committing to a full event struct, since only a
//! handful of fields matter to this handler.

use serde_json::{Map, Value};

use crate::errors::FormError;

/// HTTP method of the inbound request. Function URL events carry it at
/// `requestContext.http.method`; the REST-proxy shape uses a top-level
/// `httpMethod`.
pub fn http_method(event: &Value) -> Option<&str> {
    event
        .get("requestContext")
        .and_then(|rc| rc.get("http"))
        .and_then(|http| http.get("method"))
        .and_then(|m| m.as_str())
        .or_else(|| event.get("httpMethod").and_then(|m| m.as_str()))
}

/// Extracts the request body as a JSON object.
///
/// The body may arrive as a JSON-encoded string (the normal Function URL
/// case) or already structured (direct invocation); both are accepted. An
/// absent body yields `{}`. A string body that fails to parse is a fault
/// and propagates.
pub fn parse_body(event: &Value) -> Result<Value, FormError> {
    match event.get("body") {
        None | Some(Value::Null) => Ok(Value::Object(Map::new())),
        Some(Value::String(raw)) => {
            serde_json::from_str(raw).map_err(|e| FormError::ParseError(e.to_string()))
        }
        Some(other) => Ok(other.clone()),
    }
}

/// Loosely-typed string lookup into open-shaped form data.
pub fn str_field<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data.get(key).and_then(|v| v.as_str())
}

/// Same, with a default for missing or non-string values.
pub fn str_field_or<'a>(data: &'a Value, key: &str, default: &'a str) -> &'a str {
    str_field(data, key).unwrap_or(default)
}
