use axum::extract::State;
use axum::http::StatusCode;

use super::FollowedData;
use crate::inbound::http::extractors::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Items created by the caller.
pub async fn list_user_followed(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
) -> Result<ApiSuccess<Vec<FollowedData>>, ApiError> {
    let items = state.followed_service.list_by_owner(&principal).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        items.iter().map(FollowedData::from).collect(),
    ))
}
