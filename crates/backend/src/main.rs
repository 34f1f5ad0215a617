pub mod handlers;
pub mod shared;

use axum::{middleware, routing::get, Router};
use shared::config::{Config, LoggingConfig};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Routes of the static host: `/health`, everything else from the static dir
/// with `index.html` as the fallback page.
fn build_router(config: &Config) -> Router {
    let static_files = ServeDir::new(&config.static_files.dir)
        .fallback(ServeFile::new(config.static_files.index_file()));

    Router::new()
        .route("/health", get(handlers::health::health))
        .fallback_service(static_files)
        .layer(middleware::from_fn(shared::request_log::request_logger))
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let log_dir = logging.dir.as_path();
    std::fs::create_dir_all(log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| logging.filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_source) = shared::config::load_config()?;
    init_tracing(&config.logging)?;
    tracing::info!("Configuration loaded from {}", config_source);

    let index = config.static_files.index_file();
    if !index.exists() {
        tracing::warn!(
            "{} not found, build the frontend with `trunk build` first",
            index.display()
        );
    }

    let app = build_router(&config);
    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        assert_eq!(handlers::health::health().await, "ok");
    }

    #[test]
    fn test_router_builds_from_default_config() {
        let _router = build_router(&Config::default());
    }
}
