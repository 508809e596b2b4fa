use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;

use super::FollowedData;
use super::FollowedRequest;
use crate::domain::followed::models::FollowedId;
use crate::inbound::http::extractors::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_followed(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<FollowedRequest>, ApiError>,
) -> Result<ApiSuccess<FollowedData>, ApiError> {
    state
        .followed_service
        .update(&principal, &FollowedId(id), body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref followed| ApiSuccess::new(StatusCode::OK, followed.into()))
}
