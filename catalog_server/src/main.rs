//! Movie catalog server.
//!
//! Owns the process lifecycle: tracing, configuration, the connection pool,
//! schema bootstrap and optional seeding, then serves the catalog router
//! until SIGINT/SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use movie_catalog::config::CatalogConfig;
use movie_catalog::routes::{catalog_router, CatalogState};
use movie_catalog::{db, metrics, seeder};

#[derive(Parser)]
#[command(name = "movie-catalog", about = "Movie catalog REST service")]
struct Cli {
    /// Server port
    #[arg(short, long, env = "CATALOG_PORT", default_value = "5000")]
    port: u16,

    /// SQLite database path
    #[arg(long, env = "DATABASE_URL", default_value = "catalog.db")]
    database_url: String,

    /// JSON fixture to load before serving
    #[arg(long, env = "CATALOG_SEED")]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .init();
    }

    let cli = Cli::parse();
    let config = CatalogConfig::from_env();

    tracing::info!("Starting movie catalog...");

    let pool = db::create_pool(&cli.database_url, &config)?;

    {
        let mut conn = pool
            .get()
            .await
            .map_err(|e| anyhow::anyhow!("connection pool: {e}"))?;
        tracing::info!(database = %cli.database_url, "Ensuring catalog schema...");
        db::ensure_schema(&mut conn).await?;

        if let Some(path) = &cli.seed {
            seeder::seed_from_file(&mut conn, path)
                .await
                .with_context(|| format!("seeding from {}", path.display()))?;
        }
    }

    metrics::init_metrics(config.metrics_addr);

    let app = catalog_router(CatalogState { pool, config });

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!("Movie catalog listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
