//! Identity provider configuration parsed from environment variables.

use super::types::IdentityError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client timeouts for provider calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Typed identity provider config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_url: String,
    pub timeouts: IdentityTimeouts,
}

impl IdentityConfig {
    /// Build typed provider config from environment variables.
    ///
    /// Required:
    /// - `IDENTITY_API_URL`: base URL of the provider API
    ///
    /// Optional:
    /// - `IDENTITY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `IDENTITY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the provider URL is missing or empty.
    pub fn from_env() -> Result<Self, IdentityError> {
        let api_url = std::env::var("IDENTITY_API_URL")
            .map_err(|_| IdentityError::MissingConfig { var: "IDENTITY_API_URL".into() })?;
        let timeouts = IdentityTimeouts {
            request_secs: env_parse_u64("IDENTITY_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("IDENTITY_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Self::new(api_url, timeouts)
    }

    /// Build config from explicit values, normalizing the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is empty after trimming.
    pub fn new(api_url: impl Into<String>, timeouts: IdentityTimeouts) -> Result<Self, IdentityError> {
        let api_url = api_url.into().trim().trim_end_matches('/').to_string();
        if api_url.is_empty() {
            return Err(IdentityError::ConfigParse("empty IDENTITY_API_URL".into()));
        }
        Ok(Self { api_url, timeouts })
    }
}

impl Default for IdentityTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
