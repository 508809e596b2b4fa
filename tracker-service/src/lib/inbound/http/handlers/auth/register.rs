use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use super::CookieResponse;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::errors::DomainError;
use crate::domain::user::models::Password;
use crate::domain::user::models::Username;
use crate::inbound::http::cookies;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RegisterRequest>, ApiError>,
) -> Result<CookieResponse, ApiError> {
    let token = state
        .auth_service
        .register(body.try_into_command()?)
        .await?;

    Ok((
        [(SET_COOKIE, cookies::token_cookie(&token)?)],
        ApiSuccess::new(StatusCode::CREATED, MessageData::new("registered")),
    ))
}

/// HTTP request body for registering a user (raw JSON)
///
/// Absent and `null` fields are read as empty so they fail the same
/// validation as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, DomainError> {
        let username = Username::new(self.username.unwrap_or_default())?;
        let password = Password::new(self.password.unwrap_or_default())?;
        Ok(RegisterCommand::new(username, password))
    }
}
