use super::*;

// =============================================================
// action_url
// =============================================================

#[test]
fn signup_url_encodes_email() {
    assert_eq!(
        action_url("signup", "Chess", "a@x.com"),
        "/activities/Chess/signup?email=a%40x.com"
    );
}

#[test]
fn unregister_url_uses_unregister_segment() {
    assert_eq!(
        action_url("unregister", "Chess", "a@x.com"),
        "/activities/Chess/unregister?email=a%40x.com"
    );
}

#[test]
fn activity_names_with_spaces_are_percent_encoded() {
    assert_eq!(
        action_url("signup", "Chess Club", "a@x.com"),
        "/activities/Chess%20Club/signup?email=a%40x.com"
    );
}

#[test]
fn markup_characters_never_reach_the_url_raw() {
    let url = action_url("signup", "<b>&\"'", "a&b@x.com");
    assert!(!url.contains('<'));
    assert!(!url.contains('>'));
    assert!(!url.contains('"'));
    assert_eq!(url, "/activities/%3Cb%3E%26%22%27/signup?email=a%26b%40x.com");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn transport_error_displays_cause() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "transport failure: connection refused");
}

#[test]
fn rejected_error_displays_detail() {
    let err = ApiError::Rejected {
        detail: Some("Already signed up".to_owned()),
    };
    assert_eq!(err.to_string(), "rejected: Already signed up");

    let bare = ApiError::Rejected { detail: None };
    assert_eq!(bare.to_string(), "rejected: no detail");
}
