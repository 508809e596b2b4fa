use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::AllowHeaders;
use tower_http::cors::AllowOrigin;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login;
use super::handlers::auth::logout;
use super::handlers::auth::register;
use super::handlers::followed::create_followed;
use super::handlers::followed::delete_followed;
use super::handlers::followed::get_followed;
use super::handlers::followed::list_followed;
use super::handlers::followed::list_user_followed;
use super::handlers::followed::update_followed;
use super::handlers::users::delete_account;
use super::handlers::users::update_password;
use super::handlers::users::user_info;
use super::middleware::authenticate;
use super::middleware::authorize;
use super::middleware::timeout_message;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::followed::ports::FollowedServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub followed_service: Arc<dyn FollowedServicePort>,
}

/// CORS for the browser clients: listed origins only, credentials allowed.
///
/// Request headers are mirrored rather than wildcarded, which credentialed
/// CORS does not permit.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Request pipeline, outermost first: CORS, deadline (408 with a `{message}`
/// body), trace, authentication filter, authorization policy, handler.
pub fn create_router(state: AppState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let auth_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout));

    let followed_routes = Router::new()
        .route("/followed", get(list_followed).post(create_followed))
        .route("/followed/user", get(list_user_followed))
        .route(
            "/followed/:id",
            get(get_followed).put(update_followed).delete(delete_followed),
        );

    let user_routes = Router::new()
        .route("/users/info", get(user_info))
        .route("/users/update-password", put(update_password))
        .route("/users/delete-account", delete(delete_account));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(auth_routes)
        .merge(followed_routes)
        .merge(user_routes)
        .layer(middleware::from_fn(authorize))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state.auth_service),
            authenticate,
        ))
        .layer(trace_layer)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::map_response(timeout_message))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_configured_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "http://localhost:4200".to_string(),
        ];

        assert!(cors_layer(&origins).is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_unencodable_origin() {
        assert!(cors_layer(&["http://bad\norigin".to_string()]).is_err());
    }
}
