use super::*;

// =============================================================================
// IdentityConfig::new
// =============================================================================

#[test]
fn new_trims_trailing_slash() {
    let cfg = IdentityConfig::new("https://id.example.test/", IdentityTimeouts::default()).unwrap();
    assert_eq!(cfg.api_url, "https://id.example.test");
}

#[test]
fn new_trims_whitespace() {
    let cfg = IdentityConfig::new("  https://id.example.test  ", IdentityTimeouts::default()).unwrap();
    assert_eq!(cfg.api_url, "https://id.example.test");
}

#[test]
fn new_rejects_empty_url() {
    let err = IdentityConfig::new("   ", IdentityTimeouts::default()).unwrap_err();
    assert!(err.to_string().contains("IDENTITY_API_URL"));
}

#[test]
fn default_timeouts() {
    let timeouts = IdentityTimeouts::default();
    assert_eq!(timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

// =============================================================================
// IdentityConfig::from_env
// =============================================================================

/// Single test owns all `IDENTITY_*` env mutation so parallel test runs
/// cannot race on it.
#[test]
fn from_env_missing_then_configured() {
    unsafe {
        std::env::remove_var("IDENTITY_API_URL");
        std::env::remove_var("IDENTITY_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("IDENTITY_CONNECT_TIMEOUT_SECS");
    }
    let err = IdentityConfig::from_env().unwrap_err();
    assert!(matches!(err, IdentityError::MissingConfig { .. }));

    unsafe {
        std::env::set_var("IDENTITY_API_URL", "https://id.example.test/");
        std::env::set_var("IDENTITY_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("IDENTITY_CONNECT_TIMEOUT_SECS", "7");
    }
    let cfg = IdentityConfig::from_env().unwrap();
    assert_eq!(cfg.api_url, "https://id.example.test");
    assert_eq!(cfg.timeouts, IdentityTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe {
        std::env::remove_var("IDENTITY_API_URL");
        std::env::remove_var("IDENTITY_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("IDENTITY_CONNECT_TIMEOUT_SECS");
    }
}
