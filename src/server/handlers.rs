//! HTTP request handlers
//!
//! Implementation of the HTTP endpoint for the teleporter page.

use crate::{page, server::app::AppState};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Index page endpoint
///
/// GET /
///
/// Renders the teleporter page with the configured author credit.
pub async fn home(State(state): State<AppState>) -> Response {
    let author = &state.settings.page.author;

    match page::render_index(author) {
        Ok(html) => {
            tracing::debug!("Rendered index page for author: {}", author);
            (StatusCode::OK, Html(html)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to render index page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Internal Server Error</h1>".to_string()),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use std::sync::Arc;

    fn create_test_state() -> AppState {
        AppState {
            settings: Arc::new(Settings::default()),
        }
    }

    fn create_test_state_with_author(author: &str) -> AppState {
        let mut settings = Settings::default();
        settings.page.author = author.to_string();
        AppState {
            settings: Arc::new(settings),
        }
    }

    #[tokio::test]
    async fn test_home_handler_status() {
        let state = create_test_state();
        let response = home(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_home_handler_default_author() {
        let state = create_test_state();
        let response = home(State(state)).await;

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("Random Earth Teleporter"));
        assert!(html.contains("Anonymous Developer"));
    }

    #[tokio::test]
    async fn test_home_handler_custom_author() {
        let state = create_test_state_with_author("Jane Doe");
        let response = home(State(state)).await;

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("Jane Doe"));
        assert!(!html.contains("Anonymous Developer"));
    }

    #[tokio::test]
    async fn test_home_handler_content_type() {
        let state = create_test_state();
        let response = home(State(state)).await;

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));
    }
}
