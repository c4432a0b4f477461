use std::env;

/// Process-wide configuration, read from the environment once at cold start.
///
/// Only the reCAPTCHA secret is functionally required; it is still read with
/// a default so that a misconfigured deployment sends an empty secret and the
/// verification service rejects every submission instead of the Lambda
/// failing to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub recaptcha_secret_key: String,
    pub log_bucket_name: Option<String>,
    pub jira_domain: Option<String>,
    pub jira_email: Option<String>,
    pub jira_api_token: Option<String>,
    pub jira_project_key: Option<String>,
}

/// Fully-resolved Jira settings; present only when all four values are set.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub domain: String,
    pub email: String,
    pub api_token: String,
    pub project_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            recaptcha_secret_key: env::var("RECAPTCHA_SECRET_KEY").unwrap_or_default(),
            log_bucket_name: env::var("LOG_BUCKET_NAME").ok(),
            jira_domain: env::var("JIRA_DOMAIN").ok(),
            jira_email: env::var("JIRA_EMAIL").ok(),
            jira_api_token: env::var("JIRA_API_TOKEN").ok(),
            jira_project_key: env::var("JIRA_PROJECT_KEY").ok(),
        }
    }

    /// Returns `Some` only when every Jira setting is present; any missing
    /// value disables issue creation for the whole process lifetime.
    pub fn jira(&self) -> Option<JiraConfig> {
        Some(JiraConfig {
            domain: self.jira_domain.clone()?,
            email: self.jira_email.clone()?,
            api_token: self.jira_api_token.clone()?,
            project_key: self.jira_project_key.clone()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_jira() -> AppConfig {
        AppConfig {
            recaptcha_secret_key: "secret".to_string(),
            log_bucket_name: Some("bucket".to_string()),
            jira_domain: Some("example.atlassian.net".to_string()),
            jira_email: Some("bot@example.com".to_string()),
            jira_api_token: Some("token".to_string()),
            jira_project_key: Some("WEB".to_string()),
        }
    }

    #[test]
    fn jira_config_requires_all_four_values() {
        assert!(config_with_jira().jira().is_some());

        let mut partial = config_with_jira();
        partial.jira_project_key = None;
        assert!(partial.jira().is_none());

        let mut partial = config_with_jira();
        partial.jira_api_token = None;
        assert!(partial.jira().is_none());
    }
}
