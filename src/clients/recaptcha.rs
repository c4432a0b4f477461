//! reCAPTCHA siteverify client.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

use crate::core::models::VerificationResult;
use crate::errors::FormError;

const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Seam for the verification call so tests can substitute a fake.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, secret: &str, token: &str) -> Result<VerificationResult, FormError>;
}

/// Calls Google's siteverify endpoint with a URL-encoded form body.
pub struct RecaptchaClient;

#[async_trait]
impl TokenVerifier for RecaptchaClient {
    async fn verify(&self, secret: &str, token: &str) -> Result<VerificationResult, FormError> {
        let response = HTTP_CLIENT
            .post(SITEVERIFY_URL)
            .form(&[("secret", secret), ("response", token)])
            .send()
            .await
            .map_err(|e| FormError::VerificationError(e.to_string()))?;

        let result = response
            .json::<VerificationResult>()
            .await
            .map_err(|e| FormError::VerificationError(e.to_string()))?;

        Ok(result)
    }
}
