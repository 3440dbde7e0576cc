use super::*;

#[test]
fn user_message_prefers_backend_detail() {
    let err = ApiError::Status {
        status: 400,
        body: r#"{"detail":"You are already a member of this club."}"#.to_owned(),
    };
    assert_eq!(err.user_message(), "You are already a member of this club.");
}

#[test]
fn user_message_falls_back_on_non_json_body() {
    let err = ApiError::Status {
        status: 500,
        body: "<html>Server Error</html>".to_owned(),
    };
    assert_eq!(err.user_message(), "An unexpected error occurred.");
}

#[test]
fn user_message_for_expired_session_names_sign_in() {
    let msg = ApiError::Unauthorized.user_message();
    assert!(msg.contains("sign in"));
}

#[test]
fn user_message_generic_for_network_and_decode() {
    assert_eq!(
        ApiError::Network("offline".to_owned()).user_message(),
        "An unexpected error occurred."
    );
    assert_eq!(
        ApiError::Decode("bad json".to_owned()).user_message(),
        "An unexpected error occurred."
    );
}
