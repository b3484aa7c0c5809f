//! Retro server - HTTP boundary for the retrospective journal.
//!
//! Translates the JSON contract consumed by the UI into entry service
//! calls. Owns process concerns: configuration, logging, and the
//! data-directory bootstrap.

mod error;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use retro_core::storage::SqliteStorage;
use retro_core::{EntryService, VERSION};

use crate::state::AppState;

/// Retro - a single-user retrospective journal server
#[derive(Parser)]
#[command(name = "retro-server")]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, env = "RETRO_DB", default_value = "data/retro.sqlite")]
    db: PathBuf,

    /// Address to listen on
    #[arg(long, env = "RETRO_LISTEN", default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // SQLite creates the file on first open, but not its directory.
    retro_core::fs::ensure_parent_dir(&cli.db)
        .with_context(|| format!("failed to create data directory for {}", cli.db.display()))?;

    let storage = SqliteStorage::open(&cli.db)
        .with_context(|| format!("failed to open entry store at {}", cli.db.display()))?;
    let app = routes::create_router(AppState::new(EntryService::new(storage)));

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("failed to bind {}", cli.listen))?;
    tracing::info!(addr = %cli.listen, db = %cli.db.display(), "retro server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
