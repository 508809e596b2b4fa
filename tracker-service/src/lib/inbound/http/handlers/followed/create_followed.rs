use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;

use super::FollowedData;
use super::FollowedRequest;
use crate::inbound::http::extractors::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_followed(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    WithRejection(Json(body), _): WithRejection<Json<FollowedRequest>, ApiError>,
) -> Result<ApiSuccess<FollowedData>, ApiError> {
    state
        .followed_service
        .create(&principal, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref followed| ApiSuccess::new(StatusCode::OK, followed.into()))
}
