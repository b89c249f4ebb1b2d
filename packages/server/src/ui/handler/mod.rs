//! Handler modules for HTTP endpoints.

pub mod http;

pub use http::{create_room, delete_room, get_room, health_check, update_room};
