//! HTTP-backed identity provider client.
//!
//! DESIGN
//! ======
//! Thin wrapper over the provider's REST surface. A 401 or 404 from any
//! endpoint is a signed-out answer, not an error; only transport failures
//! and unexpected statuses surface as `IdentityError`. An empty session
//! token short-circuits to signed out without a network round trip.

use std::time::Duration;

use serde::Deserialize;

use super::config::{IdentityConfig, IdentityTimeouts};
use super::types::{AuthSnapshot, IdentityError, User};
use super::IdentityProvider;

#[derive(Debug, Deserialize)]
struct SessionResponse {
    user_id: String,
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    jwt: String,
}

/// Client for the external identity provider's REST API.
pub struct HttpIdentityProvider {
    http: reqwest::Client,
    api_url: String,
}

impl HttpIdentityProvider {
    /// Build a provider client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `IDENTITY_API_URL` is missing or the HTTP
    /// client fails to build.
    pub fn from_env() -> Result<Self, IdentityError> {
        Self::from_config(IdentityConfig::from_env()?)
    }

    /// Build a provider client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: IdentityConfig) -> Result<Self, IdentityError> {
        let http = build_http_client(config.timeouts)?;
        Ok(Self { http, api_url: config.api_url })
    }

    /// Base URL of the provider API.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Issue one authenticated GET against a provider endpoint.
    /// `Ok(None)` means the provider answered signed-out (401/404).
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        session_token: &str,
    ) -> Result<Option<T>, IdentityError> {
        let resp = self
            .http
            .get(format!("{}{path}", self.api_url))
            .header("Authorization", format!("Bearer {session_token}"))
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(IdentityError::Response { status: status.as_u16(), body });
        }

        resp.json::<T>()
            .await
            .map(Some)
            .map_err(|e| IdentityError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn auth_state(&self, session_token: &str) -> Result<AuthSnapshot, IdentityError> {
        if session_token.is_empty() {
            return Ok(AuthSnapshot::signed_out());
        }
        let session: Option<SessionResponse> = self.get_json("/v1/session", session_token).await?;
        Ok(match session {
            Some(s) => AuthSnapshot::signed_in(s.user_id, s.session_id),
            None => AuthSnapshot::signed_out(),
        })
    }

    async fn current_user(&self, session_token: &str) -> Result<Option<User>, IdentityError> {
        if session_token.is_empty() {
            return Ok(None);
        }
        self.get_json("/v1/user", session_token).await
    }

    async fn get_token(&self, session_token: &str) -> Result<Option<String>, IdentityError> {
        if session_token.is_empty() {
            return Ok(None);
        }
        let token: Option<TokenResponse> = self.get_json("/v1/token", session_token).await?;
        Ok(token.map(|t| t.jwt))
    }
}

fn build_http_client(timeouts: IdentityTimeouts) -> Result<reqwest::Client, IdentityError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
