//! HTTP API request/response DTOs for the room service.

use serde::{Deserialize, Serialize};

use crate::domain::Room;

/// Room representation returned by `GET /room`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDto {
    pub id: String,
    pub availability: String,
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.to_string(),
            availability: room.availability.into_string(),
        }
    }
}

/// Request body for create and update.
///
/// Any `id` sent by the client is ignored; ids come from the server or the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoomPayloadDto {
    #[serde(default)]
    pub availability: String,
}

impl RoomPayloadDto {
    /// Decode a request body, falling back to the zero value on malformed input.
    ///
    /// Decode errors are logged and do not abort the request, so a bad body
    /// is handled like an empty availability.
    pub fn decode_lenient(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to decode room payload: {}", e);
                Self::default()
            }
        }
    }
}

/// Confirmation body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponseDto {
    pub success: String,
}

/// Error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDto {
    pub description: String,
}
