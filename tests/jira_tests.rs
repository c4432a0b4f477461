use formgate::clients::jira::build_issue_fields;
use serde_json::json;

/// Tests for the Jira issue payload mapping: summary text, ADF description,
/// custom field routing, and the resume-path substitutions.

#[test]
fn contact_submission_maps_all_fields() {
    let form_data = json!({
        "firstName": "Jo",
        "lastName": "Doe",
        "email": "jo@example.com",
        "phone": "+1 555 0100",
        "whoAreYou": "10042",
        "notes": "Interested in consulting work"
    });

    let fields = build_issue_fields("WEB", "contact", &form_data);

    assert_eq!(fields["summary"], "[contact] Submission from Jo Doe");
    assert_eq!(fields["project"]["key"], "WEB");
    assert_eq!(fields["issuetype"]["name"], "Task");
    assert_eq!(fields["labels"], json!(["contact"]));

    assert_eq!(fields["customfield_10061"], "Jo");
    assert_eq!(fields["customfield_10062"], "Doe");
    assert_eq!(fields["customfield_10063"], "jo@example.com");
    assert_eq!(fields["customfield_10064"], "+1 555 0100");
    assert_eq!(fields["customfield_10065"], json!({ "id": "10042" }));

    assert_eq!(
        fields["description"]["content"][0]["content"][0]["text"],
        "Interested in consulting work"
    );
}

#[test]
fn missing_first_name_renders_as_unknown_in_summary() {
    let fields = build_issue_fields("WEB", "contact", &json!({ "lastName": "Doe" }));
    assert_eq!(fields["summary"], "[contact] Submission from Unknown Doe");
    // The custom field itself stays empty rather than carrying the sentinel.
    assert_eq!(fields["customfield_10061"], "");
}

#[test]
fn missing_last_name_renders_as_empty_in_summary() {
    let fields = build_issue_fields("WEB", "contact", &json!({ "firstName": "Jo" }));
    assert_eq!(fields["summary"], "[contact] Submission from Jo ");
}

#[test]
fn description_document_is_valid_adf() {
    let fields = build_issue_fields("WEB", "contact", &json!({ "notes": "hi" }));
    let description = &fields["description"];

    assert_eq!(description["type"], "doc");
    assert_eq!(description["version"], 1);
    assert_eq!(description["content"][0]["type"], "paragraph");
    assert_eq!(description["content"][0]["content"][0]["type"], "text");
}

#[test]
fn resume_path_empties_description_and_pins_category() {
    let form_data = json!({
        "firstName": "Jo",
        "email": "jo@example.com",
        "phone": "+1 555 0100",
        "whoAreYou": "10042",
        "notes": "must not leak into the issue"
    });

    let fields = build_issue_fields("WEB", "download_resume", &form_data);

    assert_eq!(fields["labels"], json!(["download_resume"]));
    assert_eq!(fields["customfield_10065"], json!({ "id": "10200" }));
    assert!(fields.get("customfield_10064").is_none());

    // An ADF text node may not be empty; the paragraph has no content.
    assert_eq!(
        fields["description"]["content"],
        json!([{ "type": "paragraph", "content": [] }])
    );
}

#[test]
fn missing_notes_yield_empty_description_for_contact() {
    let fields = build_issue_fields("WEB", "contact", &json!({}));
    assert_eq!(
        fields["description"]["content"],
        json!([{ "type": "paragraph", "content": [] }])
    );
}
