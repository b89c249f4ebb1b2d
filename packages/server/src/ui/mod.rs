//! HTTP server implementation.

mod error;
mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use runner::{run, serve};
pub use signal::shutdown_signal;
