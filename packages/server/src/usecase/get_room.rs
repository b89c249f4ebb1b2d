//! UseCase: ルーム取得処理

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

use super::error::GetRoomError;

/// ルーム取得のユースケース
pub struct GetRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomUseCase {
    /// 新しい GetRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 現在のルームを取得
    pub async fn execute(&self) -> Result<Room, GetRoomError> {
        self.repository
            .find_current()
            .await
            .ok_or(GetRoomError::RoomNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Availability, AvailabilityKind, RoomIdFactory},
        infrastructure::repository::InMemoryRoomRepository,
    };

    #[tokio::test]
    async fn test_get_room_before_create() {
        // テスト項目: ルーム作成前の取得は RoomNotFound になる
        // given (前提条件):
        let usecase = GetRoomUseCase::new(Arc::new(InMemoryRoomRepository::new()));

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(result, Err(GetRoomError::RoomNotFound));
    }

    #[tokio::test]
    async fn test_get_room_success() {
        // テスト項目: 保持しているルームがそのまま返される
        // given (前提条件):
        let room = Room::new(
            RoomIdFactory::generate(),
            Availability::from(AvailabilityKind::Reserved),
        );
        let repository = Arc::new(InMemoryRoomRepository::with_room(room.clone()));
        let usecase = GetRoomUseCase::new(repository);

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(result, Ok(room));
    }
}
