//! Repository trait（ドメイン層が定義するデータアクセスの抽象化）
//!
//! UseCase 層はこの trait に依存し、具体的な実装（InMemory など）には依存しません。
//! 各メソッドは一回のロック取得で完結する read-modify-write として実装されることを前提とします。

use async_trait::async_trait;
use thiserror::Error;

use super::{Availability, Room, RoomError, RoomId, UpdateOutcome};

/// Repository 層のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No room is held, or the held room has a different id
    #[error("Room not found: {0}")]
    RoomNotFound(String),
}

impl From<RoomError> for RepositoryError {
    fn from(error: RoomError) -> Self {
        match error {
            RoomError::NotFound(id) => RepositoryError::RoomNotFound(id),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Get a copy of the current room, if any
    async fn find_current(&self) -> Option<Room>;

    /// Store `room`, replacing whatever was held. Returns the replaced room.
    async fn replace(&self, room: Room) -> Option<Room>;

    /// Remove the current room if `id` is exactly its canonical string form
    async fn remove(&self, id: &str) -> Result<Room, RepositoryError>;

    /// Set the availability of the current room if its id is `id`
    async fn update_availability(
        &self,
        id: &RoomId,
        availability: Availability,
    ) -> Result<UpdateOutcome, RepositoryError>;
}
