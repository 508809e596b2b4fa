use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use super::CookieResponse;
use crate::domain::auth::models::LoginCommand;
use crate::inbound::http::cookies;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

/// The token only travels in the cookie, never in the body.
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<LoginRequest>, ApiError>,
) -> Result<CookieResponse, ApiError> {
    let token = state.auth_service.login(body.into_command()).await?;

    Ok((
        [(SET_COOKIE, cookies::token_cookie(&token)?)],
        ApiSuccess::new(StatusCode::OK, MessageData::new("welcome")),
    ))
}

/// Missing fields read as empty and fail as bad credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl LoginRequest {
    fn into_command(self) -> LoginCommand {
        LoginCommand {
            username: self.username.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }
}
