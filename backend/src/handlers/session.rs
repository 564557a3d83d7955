use axum::{extract::State, http::HeaderMap, Json};
use shared::api::SessionResponse;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Get the session the identity provider vouches for on this request.
pub async fn current_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<SessionResponse>> {
    let provider = state
        .provider
        .as_ref()
        .ok_or_else(|| ApiError::unauthorized("Session verification is not configured"))?;

    let session = provider.assert_session(&headers).await?;
    Ok(Json(session.into()))
}

