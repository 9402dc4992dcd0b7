//! Automations table server
//!
//! Serves paged, filtered, sorted slices of a static JSON dataset to the
//! browser table.
//!
//! Usage:
//!   autotable-server --port 3002 --data data/automations.json
//!
//! The dataset is read-only; the server keeps no per-client state.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use autotable_server::{AppState, AutomationSource, JsonFileSource, build_router};
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "autotable-server")]
#[command(about = "Automations table query server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3002")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Path to the automations JSON dataset
    #[arg(short, long, env = "AUTOTABLE_DATA", default_value = "data/automations.json")]
    data: PathBuf,

    /// Parse the dataset once and serve that snapshot for every request
    #[arg(long)]
    cache: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Automations server starting...");
    let source = if args.cache {
        JsonFileSource::cached(&args.data)
    } else {
        JsonFileSource::new(&args.data)
    };

    // Surface a missing or broken dataset at startup; requests would fail anyway.
    match source.load().await {
        Ok(records) => info!("Dataset {:?} has {} automations", args.data, records.len()),
        Err(e) => warn!("Dataset not readable yet: {}", e),
    }

    let app = build_router(AppState::new(Arc::new(source)));
    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server is listening on {}", addr);

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
