use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use chatgate::{AppState, Cli, WebServer, WebServerConfig};
use chatgate_engine::AutoEngine;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let backends = cli.build_backends()?;
    let engine = Arc::new(AutoEngine::new(backends));
    let state = AppState::new(engine)?;

    let server = WebServer::new(WebServerConfig {
        bind_addr: cli.bind,
        state,
    });
    server.start().await
}
