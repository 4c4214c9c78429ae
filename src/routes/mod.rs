//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the three demo pages plus a health endpoint under a single Axum
//! router. All pages share one `AppState` carrying the injected identity
//! provider client.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::home))
        .route("/auth-token", get(pages::auth_token))
        .route("/user-profile", get(pages::user_profile))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
