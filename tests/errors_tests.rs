use std::error::Error;

use formgate::errors::FormError;

#[test]
fn form_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = FormError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn form_error_display() {
    let error = FormError::ParseError("unexpected token".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to parse request body: unexpected token"
    );

    let error = FormError::VerificationError("timeout".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to call reCAPTCHA verification: timeout"
    );

    let error = FormError::JiraError("401 Unauthorized".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access Jira API: 401 Unauthorized"
    );
}

#[test]
fn form_error_from_conversions() {
    let err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
    let form_err: FormError = err.into();
    match form_err {
        FormError::ParseError(_) => {}
        other => panic!("unexpected error type: {other:?}"),
    }

    let err = anyhow::anyhow!("test error");
    let form_err: FormError = err.into();
    match form_err {
        FormError::HttpError(msg) => assert!(msg.contains("test error")),
        other => panic!("unexpected error type: {other:?}"),
    }

    // We can't construct a reqwest::Error directly, but we can verify the
    // conversion exists.
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> FormError {
        FormError::from(err)
    }
}
