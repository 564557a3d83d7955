//! Middleware layer that gates protected routes on the identity provider.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::ApiError;
use crate::AppState;

/// Reject requests for protected paths that carry no valid session.
///
/// Use with `axum::middleware::from_fn_with_state`. Unmatched paths, and every
/// path when the guard is disabled, pass straight through. On success the
/// [`Session`](super::Session) is stored in the request extensions.
pub async fn protect(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(guard) = state.guard.as_deref() else {
        return next.run(request).await;
    };

    let path = request.uri().path().to_string();
    if !guard.requires_session(&path) {
        return next.run(request).await;
    }

    let verdict = guard.provider.assert_session(request.headers()).await;
    match verdict {
        Ok(session) => {
            tracing::debug!("Session {} admitted to {}", session.user_id, path);
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!("Rejected request for {}: {}", path, e);
            if wants_document(request.headers()) {
                let return_to = request
                    .uri()
                    .path_and_query()
                    .map(|pq| pq.as_str())
                    .unwrap_or(path.as_str());
                Redirect::temporary(&guard.sign_in_redirect(return_to)).into_response()
            } else {
                ApiError::from(e).into_response()
            }
        }
    }
}

// Browser navigations get redirected to sign in; API calls get a 401.
fn wants_document(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use axum::{
        extract::Extension,
        http::StatusCode,
        routing::get,
        Router,
    };
    use chrono::Duration;
    use tower::ServiceExt;

    use super::*;
    use crate::guard::testing::{issue_token, SECRET};
    use crate::guard::{JwtSessionProvider, RouteGuard, RouteMatcher, Session};
    use crate::routes::build_app;

    fn guarded_state() -> AppState {
        let provider = Arc::new(JwtSessionProvider::new("__session", SECRET));
        AppState {
            guard: Some(Arc::new(RouteGuard::new(
                RouteMatcher::new(["/dashboard(.*)"]).unwrap(),
                provider.clone(),
                "/login",
            ))),
            provider: Some(provider),
        }
    }

    fn app(state: AppState, reached: Arc<AtomicBool>) -> Router {
        let pages = Router::new()
            .route("/about", get(|| async { "about" }))
            .route(
                "/dashboard/settings",
                get(move |Extension(session): Extension<Session>| {
                    let reached = reached.clone();
                    async move {
                        reached.store(true, Ordering::SeqCst);
                        format!("settings for {}", session.user_id)
                    }
                }),
            )
            .route("/dashboard/public-ish", get(|| async { "no session needed by handler" }));
        build_app(state, pages)
    }

    fn get_request(uri: &str) -> axum::http::request::Builder {
        Request::builder().uri(uri)
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_protected_path_without_session_is_rejected() {
        let reached = Arc::new(AtomicBool::new(false));
        let response = app(guarded_state(), reached.clone())
            .oneshot(get_request("/dashboard/settings").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!reached.load(Ordering::SeqCst));
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "Missing session");
    }

    #[tokio::test]
    async fn test_document_request_redirects_to_sign_in() {
        let reached = Arc::new(AtomicBool::new(false));
        let response = app(guarded_state(), reached.clone())
            .oneshot(
                get_request("/dashboard/settings")
                    .header(header::ACCEPT, "text/html,application/xhtml+xml")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/login?redirect_url=%2Fdashboard%2Fsettings"
        );
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_unprotected_path_proceeds_without_session() {
        let response = app(guarded_state(), Arc::default())
            .oneshot(get_request("/about").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "about");
    }

    #[tokio::test]
    async fn test_valid_session_reaches_handler() {
        let reached = Arc::new(AtomicBool::new(false));
        let token = issue_token(SECRET, "user_42", Duration::hours(1));
        let response = app(guarded_state(), reached.clone())
            .oneshot(
                get_request("/dashboard/settings")
                    .header(header::COOKIE, format!("__session={}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(reached.load(Ordering::SeqCst));
        assert_eq!(body_string(response).await, "settings for user_42");
    }

    #[tokio::test]
    async fn test_expired_session_rejected() {
        let token = issue_token(SECRET, "user_42", Duration::hours(-2));
        let response = app(guarded_state(), Arc::default())
            .oneshot(
                get_request("/dashboard/settings")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "Invalid or expired session");
    }

    #[tokio::test]
    async fn test_every_dashboard_path_is_guarded() {
        let response = app(guarded_state(), Arc::default())
            .oneshot(get_request("/dashboard/public-ish").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_static_assets_skip_guard() {
        let response = app(guarded_state(), Arc::default())
            .oneshot(get_request("/dashboard/logo.png").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_disabled_guard_lets_everything_through() {
        let reached = Arc::new(AtomicBool::new(false));
        let state = AppState {
            guard: None,
            provider: None,
        };
        let pages = Router::new().route(
            "/dashboard/settings",
            get({
                let reached = reached.clone();
                move || async move {
                    reached.store(true, Ordering::SeqCst);
                    "settings"
                }
            }),
        );

        let response = build_app(state, pages)
            .oneshot(get_request("/dashboard/settings").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(reached.load(Ordering::SeqCst));
    }
}
