use anyhow::Context;
use ring_road_toll::api::{AppState, create_router};
use ring_road_toll::config::ServerConfig;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server = ServerConfig::from_env().context("invalid server configuration")?;
    let tables = server
        .load_tables()
        .context("failed to load toll reference tables")?;

    match &server.config_dir {
        Some(dir) => tracing::info!(config_dir = %dir.display(), "Loaded toll tables"),
        None => tracing::info!("Loaded embedded toll tables"),
    }

    let app = create_router(AppState::new(tables));

    let addr = server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = until_signal("Ctrl-C", signal::ctrl_c());

    #[cfg(unix)]
    let terminate = until_signal("SIGTERM", async {
        signal::unix::signal(signal::unix::SignalKind::terminate())?
            .recv()
            .await;
        Ok(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Resolves when `signal` fires. A handler that cannot be installed never resolves.
async fn until_signal<F>(name: &str, signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(err) = signal.await {
        tracing::error!(error = %err, "Failed to listen for {}", name);
        std::future::pending::<()>().await;
    }
}
