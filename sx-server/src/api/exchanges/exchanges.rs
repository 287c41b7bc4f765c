//! Exchange lifecycle REST API handlers
//!
//! Thin mapping layer: arguments in, core operation, taxonomy out.
//! All business rules live in the engine.

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreateExchangeRequest, CreateMessageRequest, ExchangeDto,
    ExchangeListResponse, ExchangeResponse, MessageDto, MessageResponse, RateExchangeRequest,
    UpdateStatusRequest, UserId,
};

use sx_core::{ExchangeMode, ExchangeStatus, NewExchange};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::DateTime;
use uuid::Uuid;

/// POST /api/v1/exchanges
pub async fn create_exchange(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(req): Json<CreateExchangeRequest>,
) -> ApiResult<(StatusCode, Json<ExchangeResponse>)> {
    let provider_id = Uuid::parse_str(&req.provider_id)?;
    let mode = req
        .mode
        .as_deref()
        .map(ExchangeMode::from_str)
        .transpose()?;
    let scheduled_at = req
        .scheduled_at
        .map(|ts| {
            DateTime::from_timestamp(ts, 0).ok_or_else(|| ApiError::Validation {
                message: format!("scheduled_at timestamp {} is out of range", ts),
                field: Some("scheduled_at".into()),
            })
        })
        .transpose()?;

    let exchange = state
        .exchanges
        .create_exchange(
            user_id,
            NewExchange {
                provider_id,
                skill: req.skill,
                description: req.description,
                mode,
                location: req.location,
                scheduled_at,
                duration_hours: req.duration_hours,
                points_cost: req.points_cost,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ExchangeResponse {
            exchange: ExchangeDto::from(exchange),
        }),
    ))
}

/// GET /api/v1/exchanges
pub async fn list_exchanges(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<ExchangeListResponse>> {
    let exchanges = state.exchanges.list_for_user(user_id).await?;

    Ok(Json(ExchangeListResponse {
        exchanges: exchanges.into_iter().map(ExchangeDto::from).collect(),
    }))
}

/// PUT /api/v1/exchanges/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(exchange_id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<Json<ExchangeResponse>> {
    let exchange_uuid = Uuid::parse_str(&exchange_id)?;
    let status = ExchangeStatus::from_str(&req.status)?;

    let exchange = state
        .exchanges
        .set_status(exchange_uuid, user_id, status)
        .await?;

    Ok(Json(ExchangeResponse {
        exchange: ExchangeDto::from(exchange),
    }))
}

/// POST /api/v1/exchanges/:id/messages
pub async fn create_message(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(exchange_id): Path<String>,
    Json(req): Json<CreateMessageRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let exchange_uuid = Uuid::parse_str(&exchange_id)?;

    let message = state
        .exchanges
        .append_message(exchange_uuid, user_id, req.body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: MessageDto::from(message),
        }),
    ))
}

/// POST /api/v1/exchanges/:id/rating
pub async fn rate_exchange(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(exchange_id): Path<String>,
    Json(req): Json<RateExchangeRequest>,
) -> ApiResult<Json<ExchangeResponse>> {
    let exchange_uuid = Uuid::parse_str(&exchange_id)?;

    let exchange = state
        .exchanges
        .rate_exchange(exchange_uuid, user_id, req.rating, req.review)
        .await?;

    Ok(Json(ExchangeResponse {
        exchange: ExchangeDto::from(exchange),
    }))
}
