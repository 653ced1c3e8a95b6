use super::AppState;
use super::routes::create_router;
use std::path::Path;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `address` and serve the chat API until Ctrl-C.
pub async fn serve(address: &str, state: AppState, static_dir: Option<&Path>) -> std::io::Result<()> {
    let app = create_router(state, static_dir);

    let listener = TcpListener::bind(address).await?;
    info!("atiende listening on http://{}", listener.local_addr()?);
    if let Some(dir) = static_dir {
        info!("Serving static files from {}", dir.display());
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down atiende...");
    }
}
