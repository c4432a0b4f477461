use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Minimum siteverify score for a submission to be accepted.
pub const SCORE_THRESHOLD: f64 = 0.5;

/// One inbound form submission, deserialized from the request body.
///
/// `form_data` is deliberately open-shaped: the site's forms evolve without
/// a schema, so individual fields are extracted at the point of use with
/// defaults for anything missing.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "formData", default = "empty_object")]
    pub form_data: Value,
    #[serde(rename = "formType", default = "default_form_type")]
    pub form_type: String,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn default_form_type() -> String {
    "contact".to_string()
}

/// Response from the reCAPTCHA siteverify endpoint.
///
/// Unknown fields (hostname, action, error-codes, ...) are carried through
/// `extra` so a rejection can echo the complete payload back as diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VerificationResult {
    /// Acceptance rule: explicit success and a score at or above the
    /// threshold. A missing score counts as 0 and fails.
    pub fn accepted(&self) -> bool {
        self.success && self.score.unwrap_or(0.0) >= SCORE_THRESHOLD
    }
}

/// One audit log record, written at most once per invocation and only after
/// verification succeeded. Never updated afterwards; `jira_issue` exists in
/// the schema but the write happens before issue creation, so stored objects
/// omit it.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub form_type: String,
    pub data: Value,
    pub verification_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira_issue: Option<String>,
}
