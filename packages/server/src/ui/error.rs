//! Mapping of use case errors to HTTP problem responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    infrastructure::dto::http::ProblemDto,
    usecase::{CreateRoomError, DeleteRoomError, GetRoomError, UpdateRoomError},
};

/// An error response: status code plus a `{"description": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    description: &'static str,
}

impl ApiError {
    pub const INVALID_AVAILABILITY: Self =
        Self::new(StatusCode::BAD_REQUEST, "Invalid availability value");
    pub const ROOM_NOT_FOUND: Self = Self::new(StatusCode::NOT_FOUND, "Room not found!");
    pub const UNABLE_TO_DELETE: Self =
        Self::new(StatusCode::NOT_FOUND, "Unable to delete, room not found!");

    const fn new(status: StatusCode, description: &'static str) -> Self {
        Self {
            status,
            description,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ProblemDto {
            description: self.description.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<CreateRoomError> for ApiError {
    fn from(error: CreateRoomError) -> Self {
        match error {
            CreateRoomError::InvalidAvailability(_) => Self::INVALID_AVAILABILITY,
        }
    }
}

impl From<GetRoomError> for ApiError {
    fn from(error: GetRoomError) -> Self {
        match error {
            GetRoomError::RoomNotFound => Self::ROOM_NOT_FOUND,
        }
    }
}

impl From<DeleteRoomError> for ApiError {
    fn from(error: DeleteRoomError) -> Self {
        match error {
            DeleteRoomError::RoomNotFound(_) => Self::UNABLE_TO_DELETE,
        }
    }
}

impl From<UpdateRoomError> for ApiError {
    fn from(error: UpdateRoomError) -> Self {
        match error {
            UpdateRoomError::RoomNotFound(_) => Self::ROOM_NOT_FOUND,
        }
    }
}
