use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::inbound::http::extractors::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Account of the principal bound by the authentication filter.
pub async fn user_info(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
) -> Result<ApiSuccess<UserInfoData>, ApiError> {
    state
        .user_service
        .user_info(&principal)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfoData {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<&User> for UserInfoData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            role: user.role.as_str().to_string(),
        }
    }
}
