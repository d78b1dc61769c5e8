// src/server/routes.rs
//! Axum router configuration for the larder server

use crate::server::handlers::recipes;
use crate::server::ServerState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Create the main application router
pub fn create_router(state: Arc<ServerState>) -> Router {
    // CORS configuration - permissive, the API is public-read
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let image_dir = state.config.image_dir.clone();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Recipe API
        .route(
            "/api/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route("/api/recipes/:id", get(recipes::get_recipe))
        // Uploaded images as static assets
        .nest_service("/images", ServeDir::new(image_dir))
        .with_state(state)
        .layer(cors)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{ServerConfig, StaticTokenVerifier};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let temp = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            db_path: temp.path().join("test.db").to_string_lossy().to_string(),
            image_dir: temp.path().join("images"),
            ..ServerConfig::default()
        };
        crate::db::init(&config.db_path).unwrap();

        let verifier = Box::new(StaticTokenVerifier::new("secret".to_string()));
        let state = Arc::new(ServerState::new(config, verifier));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
