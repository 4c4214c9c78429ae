use super::*;

// =============================================================================
// AuthSnapshot
// =============================================================================

#[test]
fn auth_loading_is_not_loaded() {
    let auth = AuthSnapshot::loading();
    assert!(!auth.is_loaded);
    assert!(!auth.is_signed_in);
    assert!(auth.user_id.is_none());
    assert!(auth.session_id.is_none());
}

#[test]
fn auth_signed_out_is_loaded() {
    let auth = AuthSnapshot::signed_out();
    assert!(auth.is_loaded);
    assert!(!auth.is_signed_in);
    assert!(auth.user_id.is_none());
}

#[test]
fn auth_signed_in_carries_ids() {
    let auth = AuthSnapshot::signed_in("u1", "s1");
    assert!(auth.is_loaded);
    assert!(auth.is_signed_in);
    assert_eq!(auth.user_id.as_deref(), Some("u1"));
    assert_eq!(auth.session_id.as_deref(), Some("s1"));
}

// =============================================================================
// User::primary_email
// =============================================================================

fn user_with_emails(emails: &[&str]) -> User {
    User {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        email_addresses: emails
            .iter()
            .map(|e| EmailAddress { email_address: (*e).to_string() })
            .collect(),
    }
}

#[test]
fn primary_email_none_for_empty_list() {
    let user = user_with_emails(&[]);
    assert_eq!(user.primary_email(), None);
}

#[test]
fn primary_email_is_first_entry() {
    let user = user_with_emails(&["a@x.com", "b@x.com"]);
    assert_eq!(user.primary_email(), Some("a@x.com"));
}

// =============================================================================
// UserSnapshot
// =============================================================================

#[test]
fn user_snapshot_loading() {
    let snapshot = UserSnapshot::loading();
    assert!(!snapshot.is_loaded);
    assert!(snapshot.user.is_none());
}

#[test]
fn user_snapshot_signed_in_holds_user() {
    let snapshot = UserSnapshot::signed_in(user_with_emails(&["a@x.com"]));
    assert!(snapshot.is_loaded);
    assert!(snapshot.is_signed_in);
    assert_eq!(snapshot.user.unwrap().first_name, "Ann");
}

// =============================================================================
// wire format
// =============================================================================

#[test]
fn user_deserializes_from_provider_json() {
    let user: User = serde_json::from_str(
        r#"{"first_name":"Ann","last_name":"Lee","email_addresses":[{"email_address":"a@x.com"}]}"#,
    )
    .unwrap();
    assert_eq!(user.first_name, "Ann");
    assert_eq!(user.primary_email(), Some("a@x.com"));
}

#[test]
fn user_deserializes_with_missing_email_list() {
    let user: User = serde_json::from_str(r#"{"first_name":"Ann","last_name":"Lee"}"#).unwrap();
    assert!(user.email_addresses.is_empty());
    assert_eq!(user.primary_email(), None);
}

#[test]
fn identity_error_display_includes_status() {
    let err = IdentityError::Response { status: 503, body: "down".into() };
    assert!(err.to_string().contains("503"));
}
