use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;

use super::FollowedData;
use crate::domain::followed::models::FollowedId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_followed(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<ApiSuccess<FollowedData>, ApiError> {
    state
        .followed_service
        .get(&FollowedId(id))
        .await
        .map_err(ApiError::from)
        .map(|ref followed| ApiSuccess::new(StatusCode::OK, followed.into()))
}
