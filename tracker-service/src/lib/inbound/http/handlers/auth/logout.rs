use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;

use super::CookieResponse;
use crate::inbound::http::cookies;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;

/// Tokens are stateless, so logging out only clears the cookie.
pub async fn logout() -> CookieResponse {
    (
        [(SET_COOKIE, cookies::cleared_token_cookie())],
        ApiSuccess::new(StatusCode::OK, MessageData::new("Logout successful")),
    )
}
