//! Room availability service.
//!
//! Holds at most one room in memory and exposes create / get / delete /
//! update over HTTP.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::run as run_server;
pub use ui::serve;
