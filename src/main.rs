use anyhow::Context;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;

use kiosko::api::{AppState, create_router};
use kiosko::config::CONFIG;
use kiosko::function_client::{NewsFunctionClient, partition_by_hits};

#[derive(Debug, Parser)]
#[command(name = "kiosko", about = "Chronicling America topic search functions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the search functions over HTTP
    Serve {
        /// Address to listen on, overrides BIND_ADDR
        #[arg(long)]
        bind: Option<String>,
    },
    /// Query a running get-news-data function
    Fetch {
        /// Full URL of the get-news-data function
        #[arg(long)]
        url: String,
        /// Function key sent as x-functions-key
        #[arg(long)]
        key: Option<String>,
        topics: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&CONFIG.log_level)?;

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => serve(bind.unwrap_or_else(|| CONFIG.bind_addr.clone())).await,
        Command::Fetch { url, key, topics } => fetch(url, key, topics).await,
    }
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let level: tracing::Level = level
        .parse()
        .with_context(|| format!("invalid LOG_LEVEL {level:?}"))?;

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Bridge log crate -> tracing (reqwest and hyper log through it)
    tracing_log::LogTracer::init()?;
    Ok(())
}

async fn serve(bind: String) -> anyhow::Result<()> {
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address {bind:?}"))?;

    let state = Arc::new(AppState::from_config(&CONFIG));
    if state.function_keys.is_empty() {
        tracing::warn!("FUNCTION_KEYS is empty, get-news-data will reject every request");
    }
    let app = create_router(state, &CONFIG.route_prefix);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        upstream = %CONFIG.chronicling_base_url,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {:#}", e);
    }
    tracing::info!("shutting down");
}

async fn fetch(url: String, key: Option<String>, topics: Vec<String>) -> anyhow::Result<()> {
    let client = NewsFunctionClient::new(url, key);
    let results = client.fetch_data(&topics).await?;
    let (found, not_found) = partition_by_hits(&results);

    println!("found: {}", found.join(", "));
    println!("not found: {}", not_found.join(", "));
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
