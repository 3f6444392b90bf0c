//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::config::Settings;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,
}

/// Create the main Axum application with routes and middleware
pub fn create_app(settings: Settings) -> Router {
    let state = AppState {
        settings: Arc::new(settings),
    };

    Router::new()
        .route("/", get(super::handlers::home))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
