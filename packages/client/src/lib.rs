//! CLI client for the Roomkeeper room API.

pub mod api;
pub mod cli;
pub mod error;

pub use api::{Room, RoomApiClient, UpdateResult};
pub use cli::{Cli, Command, run_client};
pub use error::ClientError;
