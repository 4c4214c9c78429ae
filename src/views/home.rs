//! Server greeting view.
//!
//! DESIGN
//! ======
//! Resolves both provider snapshots up front, logs them for inspection,
//! and renders a fixed placeholder. The rendered output deliberately does
//! not vary with the fetched data; the page exists to exercise and log the
//! server-side provider calls.

use crate::identity::{IdentityError, IdentityProvider};

/// Placeholder body rendered on every request.
pub const PLACEHOLDER_TEXT: &str = "Check inspect element for information";

/// Render the greeting page for one request.
///
/// Awaits the auth state and then the current user, logs five diagnostic
/// values, and returns the fixed placeholder.
///
/// # Errors
///
/// Propagates any provider failure unrecovered; the handler owns the
/// error response.
pub async fn render(
    identity: &dyn IdentityProvider,
    session_token: &str,
) -> Result<&'static str, IdentityError> {
    let auth = identity.auth_state(session_token).await?;
    let user = identity.current_user(session_token).await?;
    let email = user.as_ref().and_then(|u| u.primary_email());

    tracing::info!("auth()");
    tracing::info!(?auth);
    tracing::info!("currentUser()");
    tracing::info!(?user);
    tracing::info!(?email);

    Ok(PLACEHOLDER_TEXT)
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
