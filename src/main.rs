//! Student API server: load config, open storage, serve until SIGINT/SIGTERM.

use clap::Parser;
use student_api::{app, serve, shutdown_signal, AppState, Args, Config, SqliteStorage, SHUTDOWN_GRACE};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_api=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(&args).map_err(|e| {
        tracing::error!(error = %e, "failed to load config");
        e
    })?;

    let storage = SqliteStorage::new(&config).await.map_err(|e| {
        tracing::error!(error = %e, path = %config.storage_path.display(), "failed to open storage");
        e
    })?;
    tracing::info!(env = %config.env, version = env!("CARGO_PKG_VERSION"), "storage initialized");

    let state = AppState::new(storage);
    let listener = TcpListener::bind(config.socket_addr()).await?;
    serve(listener, app(state), shutdown_signal(), SHUTDOWN_GRACE).await?;
    Ok(())
}
