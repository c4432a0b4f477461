use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Failed to parse request body: {0}")]
    ParseError(String),

    #[error("Failed to call reCAPTCHA verification: {0}")]
    VerificationError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Failed to access Jira API: {0}")]
    JiraError(String),
}

impl From<reqwest::Error> for FormError {
    fn from(error: reqwest::Error) -> Self {
        FormError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for FormError {
    fn from(error: serde_json::Error) -> Self {
        FormError::ParseError(error.to_string())
    }
}

impl From<anyhow::Error> for FormError {
    fn from(error: anyhow::Error) -> Self {
        FormError::HttpError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for FormError
where
    E: std::fmt::Debug,
    R: std::fmt::Debug,
{
    fn from(error: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        FormError::AwsError(format!("{error:?}"))
    }
}
