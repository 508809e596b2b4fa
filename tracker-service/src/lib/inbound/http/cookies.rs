use axum::http::HeaderMap;
use axum::http::HeaderValue;
use axum_extra::extract::cookie::CookieJar;

use super::handlers::ApiError;
use crate::domain::auth::models::AccessToken;

pub const TOKEN_COOKIE: &str = "token";

const CLEARED_TOKEN_COOKIE: &str = "token=; Path=/; HttpOnly; Secure; SameSite=Strict; Max-Age=0";

/// `Set-Cookie` value carrying a freshly issued token.
///
/// `Max-Age` equals the token lifetime, so the cookie and the signed `exp`
/// claim lapse together.
pub fn token_cookie(token: &AccessToken) -> Result<HeaderValue, ApiError> {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; Secure; SameSite=Strict; Max-Age={}",
        TOKEN_COOKIE,
        token.value,
        token.expires_in.num_seconds()
    );

    HeaderValue::try_from(cookie)
        .map_err(|e| ApiError::InternalServerError(format!("Invalid cookie value: {}", e)))
}

/// `Set-Cookie` value that makes the browser drop the token cookie.
pub fn cleared_token_cookie() -> HeaderValue {
    HeaderValue::from_static(CLEARED_TOKEN_COOKIE)
}

/// Value of the `token` cookie, if the request carries a non-empty one.
pub fn token_from_cookie(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
