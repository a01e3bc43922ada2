//! Shared-secret authentication for internal services.
//!
//! Every request must carry an `x-internal-token` header equal to the
//! configured secret. A missing header compares as the empty string, so an
//! empty secret admits requests that send no token; startup warns about that.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Extension, Router,
};

/// Header carrying the shared secret.
pub const INTERNAL_TOKEN_HEADER: &str = "x-internal-token";

/// Extension type carrying the expected secret, injected into the router
/// layer so [`require_internal_token`] can read it without any app state.
#[derive(Clone)]
pub struct InternalToken(pub String);

/// Axum middleware that rejects requests whose `x-internal-token` header does
/// not match the [`InternalToken`] extension. The wrapped handler is never
/// invoked on rejection.
///
/// # Error responses
///
/// - `401 Unauthorized` with body `unauthorized`: token missing or wrong
/// - `500 Internal Server Error`: [`InternalToken`] extension not found
pub async fn require_internal_token(request: Request, next: Next) -> Response {
    let Some(InternalToken(expected)) = request.extensions().get::<InternalToken>() else {
        return (StatusCode::INTERNAL_SERVER_ERROR, "server configuration error").into_response();
    };

    let provided = request
        .headers()
        .get(INTERNAL_TOKEN_HEADER)
        .map_or(&b""[..], |v| v.as_bytes());

    if !constant_time_eq(expected.as_bytes(), provided) {
        return (StatusCode::UNAUTHORIZED, "unauthorized").into_response();
    }

    next.run(request).await
}

/// Wrap every route (and the fallback) of `router` behind the token check.
pub fn gate<S>(router: Router<S>, secret: impl Into<String>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn(require_internal_token))
        .layer(Extension(InternalToken(secret.into())))
}

/// Constant-time byte comparison.
///
/// Always iterates over the full length of `expected` regardless of `provided`
/// length, so response times do not reveal the secret's length.
pub fn constant_time_eq(expected: &[u8], provided: &[u8]) -> bool {
    let mut diff = u8::from(expected.len() != provided.len());
    for (i, e) in expected.iter().enumerate() {
        let p = provided.get(i).copied().unwrap_or(0xff);
        diff |= e ^ p;
    }
    diff == 0
}
