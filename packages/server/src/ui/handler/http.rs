//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::UpdateOutcome,
    infrastructure::dto::http::{RoomDto, RoomPayloadDto, SuccessResponseDto},
    ui::{error::ApiError, state::AppState},
    usecase::{CreateRoomUseCase, DeleteRoomUseCase, GetRoomUseCase, UpdateRoomUseCase},
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /room`
///
/// The body is decoded leniently: a malformed body is logged and treated as
/// an empty availability, which then fails validation.
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SuccessResponseDto>, ApiError> {
    let payload = RoomPayloadDto::decode_lenient(&body);

    CreateRoomUseCase::new(state.repository.clone())
        .execute(payload.availability)
        .await?;

    Ok(Json(SuccessResponseDto {
        success: "Room created!".to_string(),
    }))
}

/// `GET /room`
pub async fn get_room(State(state): State<Arc<AppState>>) -> Result<Json<RoomDto>, ApiError> {
    let room = GetRoomUseCase::new(state.repository.clone())
        .execute()
        .await?;

    Ok(Json(room.into()))
}

/// `DELETE /room/{id}`
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    DeleteRoomUseCase::new(state.repository.clone())
        .execute(&room_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /room/{id}`
///
/// Responds 204 without a body when the availability is already the
/// requested one, 200 with a confirmation otherwise.
pub async fn update_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payload = RoomPayloadDto::decode_lenient(&body);

    let outcome = UpdateRoomUseCase::new(state.repository.clone())
        .execute(&room_id, payload.availability)
        .await?;

    let response = match outcome {
        UpdateOutcome::Unchanged => StatusCode::NO_CONTENT.into_response(),
        UpdateOutcome::Updated => (
            StatusCode::OK,
            Json(SuccessResponseDto {
                success: "Entity updated!".to_string(),
            }),
        )
            .into_response(),
    };

    Ok(response)
}
