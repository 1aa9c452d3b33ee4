//! Request extractors shared by the handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// The raw `authorization` header, if any.
///
/// Accepted on every endpoint but not validated; extraction never rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationHeader(pub Option<String>);

impl AuthorizationHeader {
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

impl<S> FromRequestParts<S> for AuthorizationHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> AuthorizationHeader {
        let (mut parts, _) = request.into_parts();
        AuthorizationHeader::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_header_present() {
        let request = Request::builder()
            .header("authorization", "Bearer abc")
            .body(())
            .unwrap();

        let auth = extract(request).await;

        assert!(auth.is_present());
        assert_eq!(auth.0.as_deref(), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_header_absent() {
        let request = Request::builder().body(()).unwrap();

        assert_eq!(extract(request).await, AuthorizationHeader(None));
    }
}
