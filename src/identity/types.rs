//! Identity types — provider-owned snapshots and errors.
//!
//! Snapshot types are read-only views of provider state; this crate never
//! mutates them. Field names mirror the provider's wire format.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by identity provider operations.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required provider URL environment variable is not set.
    #[error("missing provider config: env var {var} not set")]
    MissingConfig { var: String },

    /// The HTTP request to the provider failed.
    #[error("provider request failed: {0}")]
    Request(String),

    /// The provider returned a non-success HTTP status.
    #[error("provider response error: status {status}")]
    Response { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("provider response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// AUTH SNAPSHOT
// =============================================================================

/// Auth state snapshot for one request.
///
/// `is_loaded` is false only while the provider subscription has not
/// resolved (e.g. no provider configured); once a provider call returns,
/// the snapshot is loaded whether or not a session exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    pub is_loaded: bool,
    pub is_signed_in: bool,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

impl AuthSnapshot {
    /// Subscription not yet resolved.
    #[must_use]
    pub fn loading() -> Self {
        Self { is_loaded: false, is_signed_in: false, user_id: None, session_id: None }
    }

    /// Resolved with no active session.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { is_loaded: true, is_signed_in: false, user_id: None, session_id: None }
    }

    /// Resolved with an active session.
    #[must_use]
    pub fn signed_in(user_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            is_loaded: true,
            is_signed_in: true,
            user_id: Some(user_id.into()),
            session_id: Some(session_id.into()),
        }
    }
}

// =============================================================================
// USER
// =============================================================================

/// One email address entry in a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email_address: String,
}

/// User profile snapshot provided by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
}

impl User {
    /// First email address, if the user has any. The list may legitimately
    /// be empty; callers must handle `None`.
    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses.first().map(|e| e.email_address.as_str())
    }
}

// =============================================================================
// USER SNAPSHOT
// =============================================================================

/// User-profile counterpart of [`AuthSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub is_loaded: bool,
    pub is_signed_in: bool,
    pub user: Option<User>,
}

impl UserSnapshot {
    /// Subscription not yet resolved.
    #[must_use]
    pub fn loading() -> Self {
        Self { is_loaded: false, is_signed_in: false, user: None }
    }

    /// Resolved with no active session.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { is_loaded: true, is_signed_in: false, user: None }
    }

    /// Resolved with an active session and profile.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { is_loaded: true, is_signed_in: true, user: Some(user) }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
