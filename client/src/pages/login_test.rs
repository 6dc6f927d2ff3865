use super::*;

#[test]
fn rejected_credentials_get_a_specific_message() {
    assert_eq!(login_failed_message(&ApiError::Unauthorized), "Incorrect username or password.");
}

#[test]
fn server_explanation_is_shown_verbatim() {
    let err = ApiError::Validation("Inactive user".to_owned());
    assert_eq!(login_failed_message(&err), "Inactive user");
}

#[test]
fn network_failure_falls_back_to_generic_message() {
    let err = ApiError::Transient("connection refused".to_owned());
    assert_eq!(login_failed_message(&err), "Login failed. Please check your credentials.");
}

#[test]
fn submit_label_reflects_progress() {
    assert_eq!(submit_label(false), "Login");
    assert_eq!(submit_label(true), "Logging in...");
}
