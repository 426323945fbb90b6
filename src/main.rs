use std::sync::Arc;

use anyhow::Result;
use rust_todo::{
    config::{Config, Storage},
    controller::TodoController,
    db::driver::Db,
    models::TodoList,
    routes::{self, AppState},
    store::{KeyValueStore, MemoryStore, SledStore},
};
use tokio::net::TcpListener;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let store: Arc<dyn KeyValueStore> = match &config.storage {
        Storage::Sled(path) => Arc::new(SledStore::new(Db::open(path)?)),
        Storage::Memory => Arc::new(MemoryStore::new()),
    };
    info!(storage = ?config.storage, "opened store");

    let mut controller = TodoController::new(store);
    controller.subscribe(|todos: &TodoList| {
        debug!(count = todos.len(), completed = todos.completed_count(), "todos updated");
    });
    controller.load().await;

    let state = AppState::new(controller, config.color_scheme);
    let app = routes::app(state.clone());

    let listener = TcpListener::bind(config.bind_addr.as_str()).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // writes are applied in order, so this leaves the newest list on disk
    state.read().await.flush().await;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
