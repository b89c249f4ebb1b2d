//! UseCase: ルーム更新処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateRoomUseCase::execute() メソッド
//! - ID の一致判定と、availability の更新 / no-op の判定
//!
//! ### どのような状況を想定しているか
//! - 正常系：異なる availability への更新
//! - 正常系：同じ availability（no-op）
//! - 異常系：ID 不一致、UUID として不正な ID
//! - 既知の挙動：作成時と違い availability を検証しない

use std::sync::Arc;

use crate::domain::{Availability, RoomId, RoomRepository, UpdateOutcome};

use super::error::UpdateRoomError;

/// ルーム更新のユースケース
pub struct UpdateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl UpdateRoomUseCase {
    /// 新しい UpdateRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルーム更新を実行
    ///
    /// availability は検証せずにそのまま保存される。
    ///
    /// # Arguments
    ///
    /// * `room_id` - リクエストパスの ID（未検証の文字列）
    /// * `availability` - 新しい availability
    ///
    /// # Returns
    ///
    /// * `Ok(UpdateOutcome::Updated)` - availability を更新した
    /// * `Ok(UpdateOutcome::Unchanged)` - 既に同じ値だった
    /// * `Err(UpdateRoomError)` - 一致するルームが無い
    pub async fn execute(
        &self,
        room_id: &str,
        availability: String,
    ) -> Result<UpdateOutcome, UpdateRoomError> {
        let room_id = RoomId::parse(room_id).map_err(|e| {
            tracing::warn!("{}", e);
            UpdateRoomError::RoomNotFound(room_id.to_string())
        })?;

        let availability = Availability::new_unchecked(availability);
        if availability.kind().is_none() {
            tracing::warn!(
                "Updating room '{}' with unrecognised availability {:?}",
                room_id,
                availability.as_str()
            );
        }

        let outcome = self
            .repository
            .update_availability(&room_id, availability)
            .await?;
        if outcome == UpdateOutcome::Updated {
            tracing::info!("Room '{}' availability updated", room_id);
        }

        Ok(outcome)
    }
}
