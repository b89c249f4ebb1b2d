//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `RoomStore` を Mutex で保護し、インメモリ DB として使用します。
//!
//! ## 技術的負債
//!
//! DB を導入するまでの暫定実装です。プロセスを再起動するとルームは失われます。
//! PostgreSQL などを実装する際は、以下の変換層が必要になります：
//!
//! ```text
//! DB Row → RoomRecord (DTO) → Room (ドメインモデル)
//! ```

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Availability, RepositoryError, Room, RoomId, RoomRepository, RoomStore,
    UpdateOutcome,
};

/// インメモリ Room Repository 実装
///
/// 全ての操作は一つの Mutex を取得している間に完結するため、
/// 同時に届いたリクエスト同士は直列化されます。
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    store: Mutex<RoomStore>,
}

impl InMemoryRoomRepository {
    /// 空の InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定したルームを保持した状態で作成
    pub fn with_room(room: Room) -> Self {
        let mut store = RoomStore::new();
        store.replace(room);
        Self {
            store: Mutex::new(store),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_current(&self) -> Option<Room> {
        let store = self.store.lock().await;
        store.current().cloned()
    }

    async fn replace(&self, room: Room) -> Option<Room> {
        let mut store = self.store.lock().await;
        store.replace(room)
    }

    async fn remove(&self, id: &str) -> Result<Room, RepositoryError> {
        let mut store = self.store.lock().await;
        Ok(store.remove(id)?)
    }

    async fn update_availability(
        &self,
        id: &RoomId,
        availability: Availability,
    ) -> Result<UpdateOutcome, RepositoryError> {
        let mut store = self.store.lock().await;
        Ok(store.update_availability(id, availability)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AvailabilityKind, RoomIdFactory};
    use std::sync::Arc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryRoomRepository の基本的な CRUD 操作
    // - ID 不一致・空ストア時のエラーハンドリング
    // - 同時アクセス時にも状態が壊れないこと
    //
    // 【なぜこのテストが必要か】
    // - Repository は UseCase から呼ばれるデータアクセス層の中核
    // - ロックの範囲が操作単位であることを保証する必要がある
    // ========================================

    fn create_room(kind: AvailabilityKind) -> Room {
        Room::new(RoomIdFactory::generate(), Availability::from(kind))
    }

    #[tokio::test]
    async fn test_find_current_on_empty_repository() {
        // テスト項目: 空のリポジトリからは何も取得できない
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();

        // when (操作):
        let result = repo.find_current().await;

        // then (期待する結果):
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_replace_then_find() {
        // テスト項目: replace したルームを find_current で取得できる
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let room = create_room(AvailabilityKind::Free);

        // when (操作):
        let previous = repo.replace(room.clone()).await;

        // then (期待する結果):
        assert!(previous.is_none());
        assert_eq!(repo.find_current().await, Some(room));
    }

    #[tokio::test]
    async fn test_remove_success() {
        // テスト項目: 一致する ID で削除すると空になる
        // given (前提条件):
        let room = create_room(AvailabilityKind::Reserved);
        let repo = InMemoryRoomRepository::with_room(room.clone());

        // when (操作):
        let result = repo.remove(&room.id.to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Ok(room));
        assert!(repo.find_current().await.is_none());
    }

    #[tokio::test]
    async fn test_remove_with_other_id() {
        // テスト項目: 異なる ID での削除は RoomNotFound になり、状態は変わらない
        // given (前提条件):
        let room = create_room(AvailabilityKind::Reserved);
        let repo = InMemoryRoomRepository::with_room(room.clone());

        // when (操作):
        let result = repo.remove(&RoomIdFactory::generate().to_string()).await;

        // then (期待する結果):
        assert!(matches!(result, Err(RepositoryError::RoomNotFound(_))));
        assert_eq!(repo.find_current().await, Some(room));
    }

    #[tokio::test]
    async fn test_update_availability() {
        // テスト項目: availability の更新が反映される
        // given (前提条件):
        let room = create_room(AvailabilityKind::Free);
        let repo = InMemoryRoomRepository::with_room(room.clone());

        // when (操作):
        let result = repo
            .update_availability(&room.id, Availability::from(AvailabilityKind::InUse))
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(UpdateOutcome::Updated));
        let current = repo.find_current().await.unwrap();
        assert_eq!(current.availability.kind(), Some(AvailabilityKind::InUse));
    }

    #[tokio::test]
    async fn test_concurrent_replace_keeps_single_room() {
        // テスト項目: 同時に replace しても常にルームは一つだけで、最後のどれかが残る
        // given (前提条件):
        let repo = Arc::new(InMemoryRoomRepository::new());
        let rooms: Vec<Room> = (0..16).map(|_| create_room(AvailabilityKind::Free)).collect();

        // when (操作):
        let handles: Vec<_> = rooms
            .iter()
            .cloned()
            .map(|room| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.replace(room).await })
            })
            .collect();
        let mut replaced = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                replaced += 1;
            }
        }

        // then (期待する結果): 最初の一回以外は必ず何かを置き換えている
        assert_eq!(replaced, rooms.len() - 1);
        let current = repo.find_current().await.unwrap();
        assert!(rooms.contains(&current));
    }
}
