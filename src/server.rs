//! Server lifecycle.
//!
//! The web server runs on a dedicated background thread with its own tokio
//! runtime so the desktop launcher window keeps the main thread. The handle
//! owns the shutdown channel; dropping it also stops the server.

use crate::config::get_config;
use crate::database::pool::create_pool;
use crate::error::{Error, Result};
use crate::{routes, AppState};
use std::net::SocketAddr;
use std::thread::JoinHandle;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::info;

pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ServerHandle {
    /// Start the web server in the background. Returns once the database is
    /// ready and the listener is bound, so the caller may open a browser
    /// immediately.
    pub fn start() -> Result<Self> {
        let config = get_config();
        let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (ready_tx, ready_rx) = std::sync::mpsc::channel::<Result<()>>();

        let thread = std::thread::Builder::new()
            .name("hygiene-server".to_string())
            .spawn(move || run_server(addr, shutdown_rx, ready_tx))?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                addr,
                shutdown: Some(shutdown_tx),
                thread: Some(thread),
            }),
            Ok(Err(e)) => {
                let _ = thread.join();
                Err(e)
            }
            Err(_) => Err(Error::Internal(
                "Server thread exited before startup completed".to_string(),
            )),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Trigger graceful shutdown and wait for the server thread to finish.
    pub fn stop(mut self) {
        self.shutdown_inner();
    }

    fn shutdown_inner(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}

fn run_server(
    addr: SocketAddr,
    shutdown_rx: oneshot::Receiver<()>,
    ready_tx: std::sync::mpsc::Sender<Result<()>>,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = ready_tx.send(Err(e.into()));
            return;
        }
    };

    runtime.block_on(async move {
        let startup = async {
            let pool = create_pool().await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            let listener = TcpListener::bind(addr).await?;
            Ok::<_, Error>((pool, listener))
        };

        match startup.await {
            Ok((pool, listener)) => {
                let app = routes::build_router(AppState::new(pool));
                let _ = ready_tx.send(Ok(()));
                info!("Server listening on http://{}", addr);

                if let Err(e) = axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown_rx.await;
                    })
                    .await
                {
                    tracing::error!(error = ?e, "server error");
                }
                info!("Server stopped");
            }
            Err(e) => {
                let _ = ready_tx.send(Err(e));
            }
        }
    });
}
