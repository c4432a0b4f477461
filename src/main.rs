use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use formgate::api::SubmissionService;
use formgate::clients::{JiraClient, RecaptchaClient, S3LogStore};
use formgate::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    formgate::setup_logging();

    // Read-only configuration and clients, built once at cold start.
    let config = AppConfig::from_env();
    let aws_config = aws_config::load_from_env().await;
    let s3 = aws_sdk_s3::Client::new(&aws_config);

    let service = Arc::new(SubmissionService::new(
        config,
        Arc::new(RecaptchaClient),
        Arc::new(S3LogStore::new(s3)),
        Arc::new(JiraClient),
    ));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let service = Arc::clone(&service);
        async move { service.handle(event).await }
    }))
    .await
}
