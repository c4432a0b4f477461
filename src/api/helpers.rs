//! Response builders for the Function URL handler.
//!
//! Every response is a `serde_json::Value` in the Lambda proxy shape:
//! `{ statusCode, headers, body }` with a JSON-encoded body string.

use serde_json::{Value, json};

fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Content-Type": "application/json"
    })
}

/// Returns the fixed 200 response for CORS pre-flight (OPTIONS) requests.
#[must_use]
pub fn cors_preflight() -> Value {
    json!({
        "statusCode": 200,
        "headers": {
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Headers": "Content-Type",
            "Access-Control-Allow-Methods": "POST, OPTIONS"
        },
        "body": ""
    })
}

/// Returns the 200 success response carrying the log key and, when issue
/// creation succeeded, the Jira issue key (explicit null otherwise).
#[must_use]
pub fn ok_success(log_key: &str, jira_issue: Option<&str>) -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": json!({
            "message": "Success",
            "id": log_key,
            "jira_issue": jira_issue
        })
        .to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns the 400 rejection response with the raw verification payload
/// attached for diagnostics.
#[must_use]
pub fn verification_rejected(details: &Value) -> Value {
    json!({
        "statusCode": 400,
        "headers": cors_headers(),
        "body": json!({
            "error": "reCAPTCHA verification failed",
            "details": details
        })
        .to_string()
    })
}

/// Returns the opaque 500 response. Detail goes to the log, never the caller.
#[must_use]
pub fn internal_error() -> Value {
    err_response(500, "Internal Server Error")
}
