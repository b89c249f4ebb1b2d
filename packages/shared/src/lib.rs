//! Shared utilities for Roomkeeper.
//!
//! Logging setup and time helpers used by both the server and the client.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
