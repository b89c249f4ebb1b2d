//! UseCase: ルーム作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - availability の検証と、新しい ID でのルームの上書き保存
//!
//! ### どのような状況を想定しているか
//! - 正常系：有効な availability でルームを作成
//! - 異常系：無効な availability（Repository は呼ばれない）
//! - エッジケース：既存ルームがある状態での再作成（無条件に上書き）

use std::sync::Arc;

use crate::domain::{Availability, AvailabilityKind, Room, RoomIdFactory, RoomRepository};

use super::error::CreateRoomError;

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `availability` - リクエストされた availability（未検証の文字列）
    ///
    /// # Returns
    ///
    /// * `Ok(Room)` - 作成されたルーム
    /// * `Err(CreateRoomError)` - availability が無効
    pub async fn execute(&self, availability: String) -> Result<Room, CreateRoomError> {
        let Ok(kind) = availability.parse::<AvailabilityKind>() else {
            tracing::warn!("Rejected room with invalid availability {:?}", availability);
            return Err(CreateRoomError::InvalidAvailability(availability));
        };

        let room = Room::new(RoomIdFactory::generate(), Availability::from(kind));
        if let Some(previous) = self.repository.replace(room.clone()).await {
            tracing::info!("Room '{}' replaced by '{}'", previous.id, room.id);
        } else {
            tracing::info!("Room '{}' created ({})", room.id, room.availability);
        }

        Ok(room)
    }
}
