//! Submission handler - one linear pipeline per invocation.
//!
//! `START -> [OPTIONS short-circuit] -> validate token -> verify ->
//! log (best-effort) -> issue creation (best-effort) -> respond`. Only the
//! verification call and body parsing may abort the flow; the two
//! side-effect calls are isolated so their failure never turns a verified
//! submission into a user-visible error.

use std::sync::Arc;

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::clients::{IssueTracker, LogStore, TokenVerifier};
use crate::core::config::AppConfig;
use crate::core::models::{LogEntry, SubmissionRequest};
use crate::errors::FormError;

/// Request-scoped orchestrator. Built once at cold start with the loaded
/// configuration and the three external-call clients; holds no mutable
/// state across invocations.
pub struct SubmissionService {
    config: AppConfig,
    verifier: Arc<dyn TokenVerifier>,
    log_store: Arc<dyn LogStore>,
    tracker: Arc<dyn IssueTracker>,
}

impl SubmissionService {
    pub fn new(
        config: AppConfig,
        verifier: Arc<dyn TokenVerifier>,
        log_store: Arc<dyn LogStore>,
        tracker: Arc<dyn IssueTracker>,
    ) -> Self {
        Self {
            config,
            verifier,
            log_store,
            tracker,
        }
    }

    /// Lambda entrypoint. Faults from the pipeline are caught here and
    /// surfaced as an opaque 500; the response itself is always `Ok`.
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<Value, Error> {
        if parsing::http_method(&event.payload) == Some("OPTIONS") {
            return Ok(helpers::cors_preflight());
        }

        match self.process(&event.payload).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!("Error: {}", e);
                Ok(helpers::internal_error())
            }
        }
    }

    async fn process(&self, payload: &Value) -> Result<Value, FormError> {
        let body = parsing::parse_body(payload)?;
        let submission: SubmissionRequest = serde_json::from_value(body)?;

        let Some(token) = submission.token.as_deref().filter(|t| !t.is_empty()) else {
            return Ok(helpers::err_response(400, "Missing reCAPTCHA token"));
        };

        // 1. Verify reCAPTCHA
        let verification = self
            .verifier
            .verify(&self.config.recaptcha_secret_key, token)
            .await?;

        if !verification.accepted() {
            info!(
                "Recaptcha failed: success={} score={:?}",
                verification.success, verification.score
            );
            return Ok(helpers::verification_rejected(&serde_json::to_value(
                &verification,
            )?));
        }

        // 2. Log to S3
        let log_key = self.write_log(&submission, verification.score).await;

        // 3. Create Jira issue
        let jira_issue = self.create_issue(&submission).await;

        Ok(helpers::ok_success(&log_key, jira_issue.as_deref()))
    }

    /// Builds the log entry and writes it when a bucket is configured.
    /// Returns the computed key regardless of write outcome: the response
    /// reports it even when the write was skipped or failed.
    async fn write_log(&self, submission: &SubmissionRequest, score: Option<f64>) -> String {
        let now = Utc::now();
        let key = format!(
            "logs/{}/{}_{}.json",
            submission.form_type,
            now.timestamp(),
            parsing::str_field_or(&submission.form_data, "email", "anon")
        );

        let entry = LogEntry {
            timestamp: now.to_rfc3339(),
            form_type: submission.form_type.clone(),
            data: submission.form_data.clone(),
            verification_score: score,
            jira_issue: None,
        };

        let Some(bucket) = self.config.log_bucket_name.as_deref() else {
            info!("LOG_BUCKET_NAME not set, skipping S3 upload");
            return key;
        };

        match serde_json::to_string(&entry) {
            Ok(body) => {
                if let Err(e) = self.log_store.put_object(bucket, &key, body).await {
                    warn!("Failed to write log entry {}: {}", key, e);
                }
            }
            Err(e) => warn!("Failed to serialize log entry {}: {}", key, e),
        }

        key
    }

    /// Creates the Jira issue when fully configured. Missing configuration
    /// skips silently; call failure is logged and yields `None`.
    async fn create_issue(&self, submission: &SubmissionRequest) -> Option<String> {
        let Some(jira) = self.config.jira() else {
            info!("Jira not fully configured, skipping issue creation");
            return None;
        };

        let fields = crate::clients::jira::build_issue_fields(
            &jira.project_key,
            &submission.form_type,
            &submission.form_data,
        );

        match self.tracker.create_issue(&jira, fields).await {
            Ok(key) => {
                info!("Created Jira issue {}", key);
                Some(key)
            }
            Err(e) => {
                warn!("Jira issue creation failed: {}", e);
                None
            }
        }
    }
}
