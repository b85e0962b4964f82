//! HTTP server command for the trivia API

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use triviactl_server::db::connect_with_options;
use triviactl_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL (postgres://... or sqlite:...)
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://trivia.db")]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting triviactl server on {}", args.bind);

    let store = connect_with_options(&args.database_url, args.max_connections)
        .await
        .context("Failed to connect to database")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
