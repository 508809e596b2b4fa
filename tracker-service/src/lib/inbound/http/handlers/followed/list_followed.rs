use axum::extract::State;
use axum::http::StatusCode;

use super::FollowedData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_followed(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<FollowedData>>, ApiError> {
    let items = state.followed_service.list_all().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        items.iter().map(FollowedData::from).collect(),
    ))
}
