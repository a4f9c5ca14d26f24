//! Admin authentication. Credentials come from configuration and are checked
//! by an `AdminAuthenticator` held in `AppState`.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::state::AppState;

pub trait AdminAuthenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> bool;
}

/// Accepts a single bearer token supplied via `ADMIN_TOKEN`.
pub struct StaticTokenAuthenticator {
    token: String,
}

impl StaticTokenAuthenticator {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

impl AdminAuthenticator for StaticTokenAuthenticator {
    fn authenticate(&self, token: &str) -> bool {
        !self.token.is_empty() && constant_time_eq(self.token.as_bytes(), token.as_bytes())
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Proof that the request carried an accepted admin bearer token.
#[derive(Debug)]
pub struct AdminSession;

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim);

        let Some(token) = token else {
            warn!("Admin access denied: missing bearer token");
            return Err(AppError::Unauthorized);
        };

        if !state.admin_auth.authenticate(token) {
            warn!("Admin access denied: token rejected");
            return Err(AppError::Unauthorized);
        }

        debug!("Admin session accepted");
        Ok(AdminSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_token_accepted() {
        let auth = StaticTokenAuthenticator::new("s3cret".to_string());
        assert!(auth.authenticate("s3cret"));
    }

    #[test]
    fn test_wrong_token_rejected() {
        let auth = StaticTokenAuthenticator::new("s3cret".to_string());
        assert!(!auth.authenticate("s3cre"));
        assert!(!auth.authenticate("s3cret!"));
        assert!(!auth.authenticate(""));
    }

    #[test]
    fn test_empty_configured_token_accepts_nothing() {
        let auth = StaticTokenAuthenticator::new(String::new());
        assert!(!auth.authenticate(""));
    }
}
