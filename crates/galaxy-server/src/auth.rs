//! Owner Identity Resolution (X-User-Id header)
//!
//! The frontend forwards the authenticated user id in the `X-User-Id`
//! header. Requests without one fall back to the shared demo identity, so
//! the app stays usable without signing in. Core operations never read this
//! themselves; every service takes an explicit owner id.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Header carrying the acting user's identifier
pub const OWNER_HEADER: &str = "x-user-id";

/// Guest identity used when no header is supplied
pub const DEMO_OWNER_ID: &str = "demo-user";

/// Extractor resolving the acting owner for a request
#[derive(Debug, Clone)]
pub struct OwnerId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for OwnerId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let owner = parts
            .headers
            .get(OWNER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEMO_OWNER_ID)
            .to_string();

        Ok(OwnerId(owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    async fn resolve(request: Request<()>) -> String {
        let (mut parts, _) = request.into_parts();
        let OwnerId(owner) = OwnerId::from_request_parts(&mut parts, &()).await.unwrap();
        owner
    }

    #[tokio::test]
    async fn test_header_value_wins() {
        let request = Request::builder()
            .header("X-User-Id", "user-42")
            .body(())
            .unwrap();
        assert_eq!(resolve(request).await, "user-42");
    }

    #[tokio::test]
    async fn test_missing_header_falls_back_to_demo_user() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(resolve(request).await, DEMO_OWNER_ID);
    }

    #[tokio::test]
    async fn test_blank_header_falls_back_to_demo_user() {
        let request = Request::builder()
            .header("X-User-Id", "   ")
            .body(())
            .unwrap();
        assert_eq!(resolve(request).await, DEMO_OWNER_ID);
    }
}
