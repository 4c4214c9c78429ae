//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the identity-provider client behind a trait object so page
//! handlers can be exercised against a mock provider in tests.

use std::sync::Arc;

use crate::identity::IdentityProvider;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Optional identity provider client. `None` if provider env vars are
    /// not configured; pages then render their loading state.
    pub identity: Option<Arc<dyn IdentityProvider>>,
}

impl AppState {
    #[must_use]
    pub fn new(identity: Option<Arc<dyn IdentityProvider>>) -> Self {
        Self { identity }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
