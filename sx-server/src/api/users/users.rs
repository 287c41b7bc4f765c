//! User directory REST API handlers

use crate::{
    ApiError, ApiResult, CreateUserRequest, SearchUsersQuery, UpdateProfileRequest, UserDto,
    UserId, UserListResponse, UserResponse,
};
use crate::state::AppState;

use sx_core::User;
use sx_db::UserRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Search results are capped like the original directory view
const SEARCH_LIMIT: usize = 20;

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    for (value, field) in [
        (&req.name, "name"),
        (&req.email, "email"),
        (&req.password_hash, "password_hash"),
        (&req.location, "location"),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::Validation {
                message: format!("{} must not be empty", field),
                field: Some(field.into()),
            });
        }
    }

    let repo = UserRepository::new(state.pool.clone());

    if repo.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Validation {
            message: "a user with this email already exists".to_string(),
            field: Some("email".into()),
        });
    }

    let mut user = User::new(req.name, req.email, req.password_hash, req.location, req.bio);
    user.skills_offered = req
        .skills_offered
        .into_iter()
        .map(|dto| dto.into_model())
        .collect::<ApiResult<Vec<_>>>()?;
    user.skills_wanted = req
        .skills_wanted
        .into_iter()
        .map(|dto| dto.into_model())
        .collect::<ApiResult<Vec<_>>>()?;

    repo.create(&user).await?;

    log::info!("Registered user {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: UserDto::from(user),
        }),
    ))
}

/// GET /api/v1/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_uuid = Uuid::parse_str(&user_id)?;

    let user = UserRepository::new(state.pool.clone())
        .find_by_id(user_uuid)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", user_id),
        })?;

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}

/// GET /api/v1/users?skill=&location=&level=
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchUsersQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let users = UserRepository::new(state.pool.clone()).list_all().await?;

    let skill = query.skill.map(|s| s.to_lowercase());
    let location = query.location.map(|l| l.to_lowercase());

    let matched = users
        .into_iter()
        .filter(|user| {
            let skill_ok = skill.as_deref().is_none_or(|wanted| {
                user.skills_offered
                    .iter()
                    .any(|s| s.skill.to_lowercase().contains(wanted))
            });
            let location_ok = location
                .as_deref()
                .is_none_or(|l| user.location.to_lowercase().contains(l));
            let level_ok = query.level.as_deref().is_none_or(|level| {
                user.skills_offered.iter().any(|s| s.level.as_str() == level)
            });
            skill_ok && location_ok && level_ok
        })
        .take(SEARCH_LIMIT)
        .map(UserDto::from)
        .collect();

    Ok(Json(UserListResponse { users: matched }))
}

/// PUT /api/v1/users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let mut user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", user_id),
        })?;

    if let Some(name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "name must not be empty".to_string(),
                field: Some("name".into()),
            });
        }
        user.name = name;
    }
    if let Some(location) = req.location {
        user.location = location;
    }
    if let Some(bio) = req.bio {
        user.bio = Some(bio);
    }
    if let Some(skills) = req.skills_offered {
        user.skills_offered = skills
            .into_iter()
            .map(|dto| dto.into_model())
            .collect::<ApiResult<Vec<_>>>()?;
    }
    if let Some(skills) = req.skills_wanted {
        user.skills_wanted = skills
            .into_iter()
            .map(|dto| dto.into_model())
            .collect::<ApiResult<Vec<_>>>()?;
    }

    repo.update_profile(&user).await?;

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}
