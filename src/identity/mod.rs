//! Identity provider — client for the external authentication service.
//!
//! DESIGN
//! ======
//! The provider is an opaque external collaborator: it owns sessions, user
//! profiles, and bearer tokens. This crate only reads snapshots of that
//! state. Pages receive the client as an injected `IdentityProvider` trait
//! object rather than reaching for an ambient global, so they can be unit
//! tested against a mock without a live provider.

pub mod config;
pub mod provider;
pub mod types;

pub use config::IdentityConfig;
pub use provider::HttpIdentityProvider;
pub use types::{AuthSnapshot, EmailAddress, IdentityError, User, UserSnapshot};

/// Read-only view of the external identity provider.
///
/// Every call takes the caller's opaque session token; an empty token is
/// valid input and resolves to a signed-out state. Bearer tokens are
/// refetched on every `get_token` call — nothing is cached here.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the auth state for the given session token.
    async fn auth_state(&self, session_token: &str) -> Result<AuthSnapshot, IdentityError>;

    /// Fetch the current user's profile, `None` when signed out.
    async fn current_user(&self, session_token: &str) -> Result<Option<User>, IdentityError>;

    /// Fetch a fresh bearer token for outbound API calls, `None` when
    /// signed out.
    async fn get_token(&self, session_token: &str) -> Result<Option<String>, IdentityError>;
}
