//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::RepositoryError;

/// ルーム作成時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateRoomError {
    /// availability が free / reserved / inuse のいずれでもない
    #[error("Invalid availability value: {0:?}")]
    InvalidAvailability(String),
}

/// ルーム取得時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GetRoomError {
    /// ルームが存在しない
    #[error("Room not found")]
    RoomNotFound,
}

/// ルーム削除時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeleteRoomError {
    /// 指定された ID のルームが存在しない
    #[error("Room not found: {0}")]
    RoomNotFound(String),
}

impl From<RepositoryError> for DeleteRoomError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::RoomNotFound(id) => Self::RoomNotFound(id),
        }
    }
}

/// ルーム更新時のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateRoomError {
    /// 指定された ID のルームが存在しない
    #[error("Room not found: {0}")]
    RoomNotFound(String),
}

impl From<RepositoryError> for UpdateRoomError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::RoomNotFound(id) => Self::RoomNotFound(id),
        }
    }
}
