//! External demo API client.
//!
//! One fixed public endpoint, called with the user's bearer token. The
//! response body is passed through as raw JSON; no schema is imposed on it.

pub const EXTERNAL_API_URL: &str = "https://randomuser.me/api/";

/// Errors produced by external API calls.
#[derive(Debug, thiserror::Error)]
pub enum ExternalApiError {
    /// The HTTP request failed in transit.
    #[error("external API request failed: {0}")]
    Request(String),

    /// The API returned a non-success HTTP status.
    #[error("external API response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("external API response parse failed: {0}")]
    Parse(String),
}

/// Client for the fixed external demo endpoint.
#[derive(Clone)]
pub struct ExternalApi {
    http: reqwest::Client,
    url: String,
}

impl Default for ExternalApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalApi {
    /// Client against the fixed public endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_url(EXTERNAL_API_URL)
    }

    /// Client against an explicit URL (tests point this at a stub).
    /// No request timeout is set; a hung call is bounded only by the
    /// caller's environment.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), url: url.into() }
    }

    /// Build the outbound request for the given bearer token. The token is
    /// attached as-is; an empty token produces `Authorization: Bearer `.
    fn bearer_request(&self, token: &str) -> reqwest::RequestBuilder {
        self.http
            .get(&self.url)
            .header("Authorization", format!("Bearer {token}"))
    }

    /// Issue one GET with the bearer token and return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// body that is not valid JSON.
    pub async fn fetch(&self, token: &str) -> Result<serde_json::Value, ExternalApiError> {
        let resp = self
            .bearer_request(token)
            .send()
            .await
            .map_err(|e| ExternalApiError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ExternalApiError::Response { status: status.as_u16(), body });
        }

        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| ExternalApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "external_api_test.rs"]
mod tests;
