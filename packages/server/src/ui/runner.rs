//! Server startup.

use std::{future::Future, sync::Arc};

use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    domain::RoomRepository,
    error::ServerError,
    infrastructure::repository::InMemoryRoomRepository,
    ui::{router::create_router, signal::shutdown_signal, state::AppState},
};

/// Bind to the configured address and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve(listener, shutdown_signal()).await
}

/// Serve the room API on an already bound listener with a fresh, empty store.
///
/// Returns once `shutdown` resolves and in-flight requests have completed.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let repository: Arc<dyn RoomRepository> = Arc::new(InMemoryRoomRepository::new());
    let app = create_router(Arc::new(AppState::new(repository)));

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
