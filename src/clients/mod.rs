pub mod jira;
pub mod log_store;
pub mod recaptcha;

pub use jira::{IssueTracker, JiraClient};
pub use log_store::{LogStore, S3LogStore};
pub use recaptcha::{RecaptchaClient, TokenVerifier};
