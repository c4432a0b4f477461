/// Formgate - a Lambda Function URL handler for website form submissions.
///
/// Each invocation runs one linear pipeline:
/// 1. Verify the submission's reCAPTCHA v3 token against Google's
///    siteverify endpoint (mandatory gate).
/// 2. Write an audit log entry to S3 (best-effort, optional).
/// 3. Create a Jira issue for the submission (best-effort, optional).
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (Function URL) for serverless execution
/// - S3 as an append-only audit log
/// - Jira Cloud REST v3 for lead tracking
/// - Tokio for the async runtime
///
/// Configuration is read from the environment once at cold start and
/// injected into the handler; nothing mutable is shared across invocations.
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Call once from `main` before the runtime
/// starts.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
