//! Auth gate: turns the `Authorization` header into a trusted [`AuthUser`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::UserId;

const BEARER_SCHEME: &str = "Bearer";

/// Authenticated user id, written into request extensions by [`require_auth`] only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or(AppError::Unauthorized)
    }
}

/// Pull the credential out of the header. Accepts `Bearer <token>` (scheme is
/// case-insensitive) or a bare token. `None` when no token is left.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(AUTHORIZATION)?.to_str().ok()?.trim_start();
    let token = match raw.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => rest,
        _ if raw.trim_end().eq_ignore_ascii_case(BEARER_SCHEME) => "",
        _ => raw,
    }
    .trim();
    (!token.is_empty()).then_some(token)
}

/// Middleware: reject with 401 unless the request carries a valid token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_token(request.headers()) else {
        warn!(uri = %request.uri(), "rejected request: missing credentials");
        return Err(AppError::Unauthorized);
    };

    let user_id = state.tokens().verify(token).map_err(|_| {
        warn!("rejected request: invalid token");
        AppError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        h
    }

    #[test]
    fn bearer_scheme_is_stripped() {
        assert_eq!(extract_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(extract_token(&headers("bearer abc")), Some("abc"));
        assert_eq!(extract_token(&headers("BEARER \t abc ")), Some("abc"));
    }

    #[test]
    fn bare_token_is_accepted() {
        assert_eq!(extract_token(&headers("abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_or_empty_header_yields_none() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
        assert_eq!(extract_token(&headers("")), None);
        assert_eq!(extract_token(&headers("   ")), None);
        assert_eq!(extract_token(&headers("Bearer ")), None);
        assert_eq!(extract_token(&headers("Bearer")), None);
        assert_eq!(extract_token(&headers("bearer    ")), None);
    }

    #[tokio::test]
    async fn extractor_rejects_without_gate() {
        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        let res = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(res, Err(AppError::Unauthorized)));

        parts.extensions.insert(AuthUser(5));
        let user = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user, AuthUser(5));
    }
}
