//! Identity provider boundary.
//!
//! The guard never decides on its own whether a session is valid; it asks an
//! [`IdentityProvider`]. The shipped provider verifies the HS256 session JWT
//! the identity service sets as a cookie (or sends as a bearer token).

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use shared::api::SessionResponse;
use thiserror::Error;

/// Session JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user id at the identity provider)
    pub sub: String,
    /// Session id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// A session the identity provider vouched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub session_id: Option<String>,
    pub expires_at: i64,
}

impl From<SessionClaims> for Session {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            session_id: claims.sid,
            expires_at: claims.exp,
        }
    }
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            user_id: session.user_id,
            session_id: session.session_id,
            expires_at: session.expires_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("Missing session")]
    MissingSession,

    #[error("Invalid or expired session")]
    InvalidSession(#[source] jsonwebtoken::errors::Error),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Assert that the request carries a valid session.
    async fn assert_session(&self, headers: &HeaderMap) -> Result<Session, GuardError>;
}

/// Verifies the provider's session token with a shared secret.
pub struct JwtSessionProvider {
    cookie_name: String,
    key: DecodingKey,
    validation: Validation,
}

impl JwtSessionProvider {
    pub fn new(cookie_name: impl Into<String>, secret: &str) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    pub fn verify(&self, token: &str) -> Result<Session, GuardError> {
        let token_data = decode::<SessionClaims>(token, &self.key, &self.validation)
            .map_err(GuardError::InvalidSession)?;
        Ok(token_data.claims.into())
    }
}

#[async_trait]
impl IdentityProvider for JwtSessionProvider {
    async fn assert_session(&self, headers: &HeaderMap) -> Result<Session, GuardError> {
        // Cookie first, then Authorization header
        let token = extract_token_from_cookie(headers, &self.cookie_name)
            .or_else(|| extract_token_from_header(headers))
            .ok_or(GuardError::MissingSession)?;

        self.verify(&token)
    }
}

fn extract_token_from_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| cookie::Cookie::parse(pair.trim()).ok())
        .find(|cookie| cookie.name() == cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

fn extract_token_from_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}


#[cfg(test)]
mod tests {
    use super::testing::{issue_token, SECRET};
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Duration;

    fn provider() -> JwtSessionProvider {
        JwtSessionProvider::new("__session", SECRET)
    }

    fn headers(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[tokio::test]
    async fn test_session_from_cookie() {
        let token = issue_token(SECRET, "user_1", Duration::hours(1));
        let headers = headers(header::COOKIE, &format!("theme=dark; __session={}", token));

        let session = provider().assert_session(&headers).await.unwrap();
        assert_eq!(session.user_id, "user_1");
        assert_eq!(session.session_id.as_deref(), Some("sess_test"));
    }

    #[tokio::test]
    async fn test_session_from_bearer_header() {
        let token = issue_token(SECRET, "user_2", Duration::hours(1));
        let headers = headers(header::AUTHORIZATION, &format!("Bearer {}", token));

        let session = provider().assert_session(&headers).await.unwrap();
        assert_eq!(session.user_id, "user_2");
    }

    #[tokio::test]
    async fn test_missing_session() {
        let result = provider().assert_session(&HeaderMap::new()).await;
        assert!(matches!(result, Err(GuardError::MissingSession)));

        let other_cookie = headers(header::COOKIE, "theme=dark");
        let result = provider().assert_session(&other_cookie).await;
        assert!(matches!(result, Err(GuardError::MissingSession)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issue_token(SECRET, "user_1", Duration::hours(-2));
        assert!(matches!(
            provider().verify(&token),
            Err(GuardError::InvalidSession(_))
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token("wrong-secret", "user_1", Duration::hours(1));
        assert!(matches!(
            provider().verify(&token),
            Err(GuardError::InvalidSession(_))
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(provider().verify("invalid-token").is_err());
    }
}
