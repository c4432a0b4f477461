//! Jira Cloud REST v3 client and issue payload assembly.
//!
//! The payload builder is a pure function over the submission so tests can
//! pin the field mapping without a network seam.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;

use crate::api::parsing::str_field_or;
use crate::core::config::JiraConfig;
use crate::errors::FormError;

// Custom field ids on the site's Jira project.
const CF_FIRST_NAME: &str = "customfield_10061";
const CF_LAST_NAME: &str = "customfield_10062";
const CF_EMAIL: &str = "customfield_10063";
const CF_PHONE: &str = "customfield_10064";
const CF_WHO_ARE_YOU: &str = "customfield_10065";

// "Who are you" option id used for resume downloads, where the form has no
// selector of its own.
const RESUME_CATEGORY_ID: &str = "10200";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Seam for issue creation so tests can substitute a fake.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Creates one issue and returns its key (e.g. `WEB-123`).
    async fn create_issue(&self, config: &JiraConfig, fields: Value) -> Result<String, FormError>;
}

/// Builds the `fields` object for an issue-creation request.
///
/// Summary is `[{form_type}] Submission from {firstName} {lastName}`, with
/// a missing first name rendered as `Unknown` and a missing last name as
/// empty. Resume downloads carry no free text and no phone, and their
/// category field is pinned to a fixed option instead of the form's
/// selector.
pub fn build_issue_fields(project_key: &str, form_type: &str, form_data: &Value) -> Value {
    let first_name = str_field_or(form_data, "firstName", "Unknown");
    let last_name = str_field_or(form_data, "lastName", "");
    let is_resume = form_type == "download_resume";

    let description = if is_resume {
        ""
    } else {
        str_field_or(form_data, "notes", "")
    };

    let mut fields = json!({
        "project": { "key": project_key },
        "issuetype": { "name": "Task" },
        "summary": format!("[{form_type}] Submission from {first_name} {last_name}"),
        "description": adf_document(description),
        "labels": [form_type],
    });

    fields[CF_FIRST_NAME] = json!(str_field_or(form_data, "firstName", ""));
    fields[CF_LAST_NAME] = json!(last_name);
    fields[CF_EMAIL] = json!(str_field_or(form_data, "email", ""));

    if is_resume {
        fields[CF_WHO_ARE_YOU] = json!({ "id": RESUME_CATEGORY_ID });
    } else {
        fields[CF_PHONE] = json!(str_field_or(form_data, "phone", ""));
        fields[CF_WHO_ARE_YOU] = json!({ "id": str_field_or(form_data, "whoAreYou", "") });
    }

    fields
}

/// One-paragraph Atlassian Document Format doc. ADF forbids empty text
/// nodes, so empty input yields a paragraph with no content.
fn adf_document(text: &str) -> Value {
    let paragraph = if text.is_empty() {
        json!({ "type": "paragraph", "content": [] })
    } else {
        json!({
            "type": "paragraph",
            "content": [{ "type": "text", "text": text }]
        })
    };

    json!({ "type": "doc", "version": 1, "content": [paragraph] })
}

/// Issue creation against Jira Cloud, Basic auth with email + API token.
pub struct JiraClient;

#[async_trait]
impl IssueTracker for JiraClient {
    async fn create_issue(&self, config: &JiraConfig, fields: Value) -> Result<String, FormError> {
        let url = format!("https://{}/rest/api/3/issue", config.domain);

        let response = HTTP_CLIENT
            .post(&url)
            .basic_auth(&config.email, Some(&config.api_token))
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FormError::JiraError(format!(
                "issue creation returned {status}: {body}"
            )));
        }

        let created: Value = response.json().await?;
        created
            .get("key")
            .and_then(|k| k.as_str())
            .map(ToString::to_string)
            .ok_or_else(|| FormError::JiraError("response missing issue key".to_string()))
    }
}
