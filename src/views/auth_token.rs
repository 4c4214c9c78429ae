//! Auth-token view.
//!
//! Three-state render over an [`AuthSnapshot`], plus the bearer-token
//! fetch against the external demo API. The fetch is exposed as its own
//! operation and is intentionally not wired into the render path.

use crate::identity::{AuthSnapshot, IdentityError, IdentityProvider};
use crate::services::external_api::{ExternalApi, ExternalApiError};

/// Errors produced by the external-data fetch operation.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("identity error: {0}")]
    Identity(#[from] IdentityError),
    #[error("external API error: {0}")]
    ExternalApi(#[from] ExternalApiError),
}

/// Render the page body for the given auth snapshot.
#[must_use]
pub fn render(auth: &AuthSnapshot) -> String {
    if !auth.is_loaded {
        return super::LOADING_TEXT.to_string();
    }

    if !auth.is_signed_in {
        return super::SIGN_IN_PROMPT.to_string();
    }

    let user_id = auth.user_id.as_deref().unwrap_or_default();
    let session_id = auth.session_id.as_deref().unwrap_or_default();
    format!("Hello {user_id}! Your current active session is {session_id}.")
}

/// Fetch data from the external API with a fresh bearer token.
///
/// A signed-out session yields no token; the request is still issued with
/// an empty credential and the API's answer stands. Callable independently
/// of the render path, which never invokes it.
///
/// # Errors
///
/// Returns an error if token retrieval or the outbound call fails.
pub async fn fetch_external_data(
    identity: &dyn IdentityProvider,
    external: &ExternalApi,
    session_token: &str,
) -> Result<serde_json::Value, FetchError> {
    let token = identity.get_token(session_token).await?.unwrap_or_default();
    Ok(external.fetch(&token).await?)
}

#[cfg(test)]
#[path = "auth_token_test.rs"]
mod tests;
