//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Availability is not one of `free`, `reserved`, `inuse`
    #[error("Availability must be one of free, reserved, inuse (got: {0:?})")]
    InvalidAvailability(String),

    /// RoomId invalid format error (not a valid UUID format)
    #[error("RoomId must be a valid UUID format (got: {0})")]
    RoomIdInvalidFormat(String),
}

/// Errors related to Room domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// The store is empty, or holds a room with a different id
    #[error("Room not found: {0}")]
    NotFound(String),
}
