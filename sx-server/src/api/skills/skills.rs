//! Skill catalogue REST API handlers

use crate::state::AppState;
use crate::{ApiResult, SkillListResponse};

use sx_db::UserRepository;

use std::collections::BTreeSet;

use axum::{Json, extract::State};

/// GET /api/v1/skills
///
/// Every distinct skill name currently offered, sorted.
pub async fn available_skills(
    State(state): State<AppState>,
) -> ApiResult<Json<SkillListResponse>> {
    let users = UserRepository::new(state.pool.clone()).list_all().await?;

    let skills: BTreeSet<String> = users
        .into_iter()
        .flat_map(|user| user.skills_offered)
        .map(|skill| skill.skill)
        .collect();

    Ok(Json(SkillListResponse {
        skills: skills.into_iter().collect(),
    }))
}
