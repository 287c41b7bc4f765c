//! Match engine REST API handlers

use crate::state::AppState;
use crate::{ApiResult, MatchListResponse, UserId};

use axum::{Json, extract::State};

/// GET /api/v1/matches
///
/// Ranked compatibility between the caller and every other user.
pub async fn get_matches(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<MatchListResponse>> {
    let matches = state.matcher.compute_matches(user_id).await?;

    Ok(Json(MatchListResponse { matches }))
}
