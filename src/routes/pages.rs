//! Page handlers — snapshot resolution and HTML framing.
//!
//! Handlers resolve provider snapshots for the request, hand them to the
//! view functions, and wrap the returned body text in a minimal HTML
//! shell. Provider failures map to `502` here; nothing is retried.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::identity::{AuthSnapshot, UserSnapshot};
use crate::state::AppState;
use crate::views;

const COOKIE_NAME: &str = "__session";

// =============================================================================
// SESSION TOKEN EXTRACTOR
// =============================================================================

/// Opaque session token read from the session cookie. An absent cookie
/// yields an empty token, which the provider resolves as signed out.
pub struct SessionToken(pub String);

impl<S> axum::extract::FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        Ok(Self(token.to_owned()))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

fn page(body: &str) -> Response {
    Html(format!("<div>{body}</div>")).into_response()
}

fn provider_failed(err: &dyn std::error::Error) -> Response {
    tracing::error!(error = %err, "identity provider request failed");
    (StatusCode::BAD_GATEWAY, "identity provider request failed").into_response()
}

/// `GET /` — server greeting page.
pub async fn home(State(state): State<AppState>, SessionToken(token): SessionToken) -> Response {
    let Some(identity) = &state.identity else {
        return (StatusCode::SERVICE_UNAVAILABLE, "identity provider not configured").into_response();
    };

    match views::home::render(identity.as_ref(), &token).await {
        Ok(body) => page(body),
        Err(e) => provider_failed(&e),
    }
}

/// `GET /auth-token` — session greeting driven by the auth snapshot.
pub async fn auth_token(State(state): State<AppState>, SessionToken(token): SessionToken) -> Response {
    let auth = match &state.identity {
        None => AuthSnapshot::loading(),
        Some(identity) => match identity.auth_state(&token).await {
            Ok(auth) => auth,
            Err(e) => return provider_failed(&e),
        },
    };

    page(&views::auth_token::render(&auth))
}

/// `GET /user-profile` — profile greeting driven by the user snapshot.
pub async fn user_profile(State(state): State<AppState>, SessionToken(token): SessionToken) -> Response {
    let snapshot = match &state.identity {
        None => UserSnapshot::loading(),
        Some(identity) => match identity.current_user(&token).await {
            Ok(Some(user)) => UserSnapshot::signed_in(user),
            Ok(None) => UserSnapshot::signed_out(),
            Err(e) => return provider_failed(&e),
        },
    };

    page(&views::user_profile::render(&snapshot))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
