//! artparty-api - Main entry point
//!
//! HTTP backend for the art-portfolio application. Wires together
//! configuration resolution, the SQLite pool and the axum router.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use artparty_api::{build_router, AppState};
use artparty_common::config::Config;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for artparty-api
#[derive(Parser, Debug)]
#[command(name = "artparty-api")]
#[command(about = "Art-portfolio REST backend")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "ARTPARTY_PORT")]
    port: Option<u16>,

    /// Path to the SQLite database file
    #[arg(short, long, env = "ARTPARTY_DATABASE")]
    database: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long, env = "ARTPARTY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artparty_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting artparty-api v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::resolve(args.database, args.port, args.config.as_deref())
        .context("Failed to resolve configuration")?;
    info!("Database path: {}", config.database.display());

    let pool = artparty_common::db::init_database(&config.database)
        .await
        .context("Failed to initialize database")?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("artparty-api listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
