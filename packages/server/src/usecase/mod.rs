//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Repository 経由で Domain 層を操作します。

pub mod create_room;
pub mod delete_room;
pub mod error;
pub mod get_room;
pub mod update_room;

pub use create_room::CreateRoomUseCase;
pub use delete_room::DeleteRoomUseCase;
pub use error::{CreateRoomError, DeleteRoomError, GetRoomError, UpdateRoomError};
pub use get_room::GetRoomUseCase;
pub use update_room::UpdateRoomUseCase;
