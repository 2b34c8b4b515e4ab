mod catalog;
mod chat;
mod cli;
mod config;
mod errors;
mod events;
mod llm_client;
mod models;
mod page;
mod routes;
mod state;
mod terminal;

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::service::HttpChatService;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::page::Page;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    config::load_dotenv();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), config::rust_log()))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Serve { port } => serve(port).await,
        Command::Browse {
            projects,
            endpoint,
            initial,
            page_size,
        } => {
            let projects = terminal::load_projects(&projects)?;
            info!(
                "Loaded {} projects, chatting via {}",
                projects.len(),
                endpoint
            );
            let service = HttpChatService::new(endpoint)?;
            let page = Page::from_projects(projects, initial, page_size);
            terminal::run(page, &service).await
        }
    }
}

async fn serve(port: Option<u16>) -> Result<()> {
    let config = Config::from_env()?;

    info!("Starting mentor chat proxy v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(
        config.openrouter_api_key.clone(),
        config.openrouter_api_url.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState { llm };

    // The page may be served from another origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", port.unwrap_or(config.port)).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
