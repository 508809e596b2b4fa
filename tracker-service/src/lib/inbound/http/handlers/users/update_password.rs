use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::domain::errors::DomainError;
use crate::domain::user::models::Password;
use crate::inbound::http::extractors::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn update_password(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    WithRejection(Query(params), _): WithRejection<Query<UpdatePasswordParams>, ApiError>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let new_password = Password::new(params.new_password).map_err(DomainError::from)?;

    state
        .user_service
        .update_password(&principal, params.current_password, new_password)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Password updated successfully"),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordParams {
    current_password: String,
    new_password: String,
}
