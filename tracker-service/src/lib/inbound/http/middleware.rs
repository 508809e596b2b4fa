use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::headers::HeaderMapExt;

use super::cookies;
use super::handlers::ApiError;
use super::policy;
use crate::domain::auth::models::Principal;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::errors::DomainError;

/// Authentication filter.
///
/// Attaches a [`Principal`] when the request carries a token that resolves to
/// an existing user. Never rejects: a missing, stale or forged token just
/// leaves the request anonymous, and [`authorize`] decides what that means.
pub async fn authenticate(
    State(auth_service): State<Arc<dyn AuthServicePort>>,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_token(req.headers()) {
        match auth_service.authenticate_token(&token).await {
            Ok(principal) => {
                tracing::debug!(user_id = %principal.user_id, "Request authenticated");
                req.extensions_mut().insert(principal);
            }
            Err(DomainError::Internal(detail)) => {
                tracing::warn!(error = %detail, "Token resolution failed");
            }
            Err(_) => {
                tracing::debug!(path = %req.uri().path(), "Ignoring invalid token");
            }
        }
    }

    next.run(req).await
}

/// Authorization policy: anything outside the public prefixes needs a principal.
pub async fn authorize(req: Request, next: Next) -> Response {
    let path = req.uri().path();

    if policy::is_public(path) || req.extensions().get::<Principal>().is_some() {
        return next.run(req).await;
    }

    tracing::debug!(path = %path, "Rejected anonymous request");
    ApiError::unauthorized().into_response()
}

/// The request deadline answers with a bodiless 408; give it the usual
/// `{message}` body.
pub async fn timeout_message(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request exceeded the server deadline");
    ApiError::RequestTimeout("Request timed out".to_string()).into_response()
}

/// Bearer header first, then the `token` cookie.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
        .or_else(|| cookies::token_from_cookie(headers))
}
