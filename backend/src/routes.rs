use std::path::Path;

use axum::{middleware, routing::get, Router};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::error::ApiError;
use crate::guard::protect;
use crate::handlers::{health, session};
use crate::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Session routes
        .route("/session", get(session::current_session))
        .fallback(api_not_found)
}

/// Page routes: the built frontend, with `index.html` for client-side routes.
pub fn frontend_routes(frontend_dir: &str) -> Router<AppState> {
    if !Path::new(frontend_dir).exists() {
        tracing::info!(
            "Frontend directory not found at {}, serving API only",
            frontend_dir
        );
        return Router::new();
    }

    tracing::info!("Serving frontend from {}", frontend_dir);
    let index_path = format!("{}/index.html", frontend_dir);
    let serve_dir = ServeDir::new(frontend_dir).not_found_service(ServeFile::new(index_path));
    Router::new().fallback_service(serve_dir)
}

/// Assemble the application with the route guard in front of everything.
pub fn build_app(state: AppState, pages: Router<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(pages)
        .layer(middleware::from_fn_with_state(state.clone(), protect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn api_not_found() -> ApiError {
    ApiError::not_found("API route")
}
