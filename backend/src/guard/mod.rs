//! Route guard for protected pages.
//!
//! This module provides:
//! - `RouteMatcher` for the protected path patterns
//! - the `IdentityProvider` boundary and its JWT session adapter
//! - `protect` middleware that gates matched routes on a valid session

mod matcher;
mod middleware;
mod provider;

use std::sync::Arc;

pub use matcher::{in_middleware_scope, RouteMatcher};
pub use middleware::protect;
pub use provider::{GuardError, IdentityProvider, JwtSessionProvider, Session};

#[cfg(test)]
pub(crate) use provider::testing;

/// Protected patterns plus the provider that vouches for sessions on them.
pub struct RouteGuard {
    matcher: RouteMatcher,
    provider: Arc<dyn IdentityProvider>,
    sign_in_url: String,
}

impl RouteGuard {
    pub fn new(
        matcher: RouteMatcher,
        provider: Arc<dyn IdentityProvider>,
        sign_in_url: impl Into<String>,
    ) -> Self {
        Self {
            matcher,
            provider,
            sign_in_url: sign_in_url.into(),
        }
    }

    /// Whether a request for `path` needs a session.
    pub fn requires_session(&self, path: &str) -> bool {
        in_middleware_scope(path) && self.matcher.matches(path)
    }

    /// Sign-in location carrying the page to return to.
    pub fn sign_in_redirect(&self, return_to: &str) -> String {
        let separator = if self.sign_in_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}redirect_url={}",
            self.sign_in_url,
            separator,
            urlencoding::encode(return_to)
        )
    }
}
