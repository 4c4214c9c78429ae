mod identity;
mod routes;
mod services;
mod state;
mod views;

use std::sync::Arc;

use crate::identity::IdentityProvider;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize identity provider client (non-fatal: pages render their
    // loading state if config is missing).
    let identity = match identity::HttpIdentityProvider::from_env() {
        Ok(provider) => {
            tracing::info!(api_url = provider.api_url(), "identity provider initialized");
            Some(Arc::new(provider) as Arc<dyn IdentityProvider>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "identity provider not configured — auth pages disabled");
            None
        }
    };

    let state = state::AppState::new(identity);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "authpages listening");
    axum::serve(listener, app).await.expect("server failed");
}
