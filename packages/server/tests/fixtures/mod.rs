//! Test fixtures: a room server bound to an ephemeral port.

use std::net::SocketAddr;

use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    _handle: JoinHandle<Result<(), roomkeeper_server::error::ServerError>>,
}

impl TestServer {
    /// Start a server with an empty store on 127.0.0.1 and a free port.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(roomkeeper_server::serve(listener, async {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(tx),
            _handle: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn room_url(&self) -> String {
        format!("{}/room", self.base_url())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
