//! Route table.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::ui::{
    handler::{create_room, delete_room, get_room, health_check, update_room},
    state::AppState,
};

/// Build the application router.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | `/api/health` | health check |
/// | POST | `/room` | create |
/// | GET | `/room` | get |
/// | DELETE | `/room/{id}` | delete |
/// | PATCH | `/room/{id}` | update |
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/room", post(create_room).get(get_room))
        .route("/room/{id}", patch(update_room).delete(delete_room))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
