//! UseCase: ルーム削除処理
//!
//! ## テスト実装の作業記録
//!
//! ### どのような状況を想定しているか
//! - 正常系：現在のルーム ID で削除
//! - 異常系：異なる ID、ルームが無い状態、UUID として不正な ID
//! - 異常系：同じ UUID の別表記（大文字・ハイフンなし）は一致しない

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

use super::error::DeleteRoomError;

/// ルーム削除のユースケース
pub struct DeleteRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl DeleteRoomUseCase {
    /// 新しい DeleteRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルーム削除を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - リクエストパスの ID（正規表記と完全一致したときのみ削除）
    ///
    /// # Returns
    ///
    /// * `Ok(Room)` - 削除されたルーム
    /// * `Err(DeleteRoomError)` - 一致するルームが無い
    pub async fn execute(&self, room_id: &str) -> Result<Room, DeleteRoomError> {
        let room = self.repository.remove(room_id).await.inspect_err(|e| {
            tracing::warn!("Unable to delete room: {}", e);
        })?;
        tracing::info!("Room '{}' deleted", room.id);

        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            Availability, AvailabilityKind, MockRoomRepository, RepositoryError, RoomIdFactory,
        },
        infrastructure::repository::InMemoryRoomRepository,
    };

    fn create_test_repository() -> (Arc<InMemoryRoomRepository>, Room) {
        let room = Room::new(
            RoomIdFactory::generate(),
            Availability::from(AvailabilityKind::Free),
        );
        (
            Arc::new(InMemoryRoomRepository::with_room(room.clone())),
            room,
        )
    }

    #[tokio::test]
    async fn test_delete_room_success() {
        // テスト項目: 現在のルーム ID で削除でき、その後は空になる
        // given (前提条件):
        let (repository, room) = create_test_repository();
        let usecase = DeleteRoomUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(&room.id.to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Ok(room));
        assert!(repository.find_current().await.is_none());
    }

    #[tokio::test]
    async fn test_delete_room_with_other_id() {
        // テスト項目: 異なる ID では削除できず、ルームは残る
        // given (前提条件):
        let (repository, room) = create_test_repository();
        let usecase = DeleteRoomUseCase::new(repository.clone());
        let other_id = RoomIdFactory::generate().to_string();

        // when (操作):
        let result = usecase.execute(&other_id).await;

        // then (期待する結果):
        assert_eq!(result, Err(DeleteRoomError::RoomNotFound(other_id)));
        assert_eq!(repository.find_current().await, Some(room));
    }

    #[tokio::test]
    async fn test_delete_room_on_empty_repository() {
        // テスト項目: ルームが無い状態では、どの ID でも削除に失敗する
        // given (前提条件):
        let usecase = DeleteRoomUseCase::new(Arc::new(InMemoryRoomRepository::new()));

        // when (操作): nil UUID も含めて一致しない
        let result = usecase
            .execute("00000000-0000-0000-0000-000000000000")
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(DeleteRoomError::RoomNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_room_with_other_spellings_of_id() {
        // テスト項目: 大文字・ハイフンなしの ID では削除できず、ルームは残る
        // given (前提条件):
        let (repository, room) = create_test_repository();
        let usecase = DeleteRoomUseCase::new(repository.clone());

        for room_id in [
            room.id.to_string().to_uppercase(),
            room.id.as_uuid().simple().to_string(),
        ] {
            // when (操作):
            let result = usecase.execute(&room_id).await;

            // then (期待する結果):
            assert_eq!(result, Err(DeleteRoomError::RoomNotFound(room_id)));
            assert_eq!(repository.find_current().await, Some(room.clone()));
        }
    }

    #[tokio::test]
    async fn test_delete_room_passes_raw_path_id_to_repository() {
        // テスト項目: パスの ID は解析されずにそのまま Repository に渡される
        // given (前提条件):
        let mut repository = MockRoomRepository::new();
        repository
            .expect_remove()
            .withf(|id| id == "not-a-uuid")
            .times(1)
            .returning(|id| Err(RepositoryError::RoomNotFound(id.to_string())));
        let usecase = DeleteRoomUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.execute("not-a-uuid").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(DeleteRoomError::RoomNotFound("not-a-uuid".to_string()))
        );
    }
}
