use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;

use crate::domain::followed::models::FollowedId;
use crate::inbound::http::extractors::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_followed(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<StatusCode, ApiError> {
    state
        .followed_service
        .delete(&principal, &FollowedId(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
