mod config;
mod error;
mod guard;
mod handlers;
mod routes;

use anyhow::{Context, Result};
use axum::http::{header, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::guard::{IdentityProvider, JwtSessionProvider, RouteGuard, RouteMatcher};

#[derive(Clone)]
pub struct AppState {
    /// `None` when the guard is switched off by configuration.
    pub guard: Option<Arc<RouteGuard>>,
    pub provider: Option<Arc<dyn IdentityProvider>>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let guard_config = &config.guard;

        let provider: Option<Arc<dyn IdentityProvider>> =
            guard_config.session_secret.as_deref().map(|secret| {
                Arc::new(JwtSessionProvider::new(
                    guard_config.session_cookie_name.as_str(),
                    secret,
                )) as Arc<dyn IdentityProvider>
            });

        let guard = match (&provider, guard_config.enabled) {
            (Some(provider), true) => {
                let matcher = RouteMatcher::new(&guard_config.protected_routes)
                    .context("PROTECTED_ROUTES contains an invalid pattern")?;
                tracing::info!(
                    "Route guard protecting {:?}",
                    guard_config.protected_routes
                );
                Some(Arc::new(RouteGuard::new(
                    matcher,
                    provider.clone(),
                    guard_config.sign_in_url.as_str(),
                )))
            }
            (None, true) => anyhow::bail!("route guard enabled without a session secret"),
            (_, false) => {
                tracing::warn!("Route guard disabled, protected routes are publicly reachable");
                None
            }
        };

        Ok(Self { guard, provider })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = AppConfig::from_env()?;

    tracing::info!("Starting Study Planner server");

    let state = AppState::from_config(&config)?;
    let app = routes::build_app(state, routes::frontend_routes(&config.frontend_dir))
        .layer(build_cors_layer(config.cors_allowed_origins.as_deref()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build CORS layer from the configured origins.
///
/// Without `CORS_ALLOWED_ORIGINS` the layer is permissive (development only).
fn build_cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let origins: Vec<_> = allowed_origins
        .unwrap_or_default()
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!(
            "CORS_ALLOWED_ORIGINS not set or empty, using permissive CORS (not recommended for production)"
        );
        return CorsLayer::permissive();
    }

    tracing::info!("CORS configured for origins: {:?}", origins);
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(enabled: bool, secret: Option<&str>, routes: &str) -> AppConfig {
        let enabled = if enabled { "true" } else { "false" };
        AppConfig::from_lookup(|key| match key {
            "AUTH_GUARD_ENABLED" => Some(enabled.to_string()),
            "SESSION_SECRET" => secret.map(str::to_string),
            "PROTECTED_ROUTES" => Some(routes.to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_state_with_guard() {
        let state = AppState::from_config(&config(true, Some("s3cret"), "/dashboard(.*)")).unwrap();
        assert!(state.guard.is_some());
        assert!(state.provider.is_some());
    }

    #[test]
    fn test_state_without_guard_keeps_provider() {
        let state = AppState::from_config(&config(false, Some("s3cret"), "/dashboard(.*)")).unwrap();
        assert!(state.guard.is_none());
        assert!(state.provider.is_some());
    }

    #[test]
    fn test_invalid_pattern_fails_startup() {
        assert!(AppState::from_config(&config(true, Some("s3cret"), "/dashboard(.*")).is_err());
    }
}
