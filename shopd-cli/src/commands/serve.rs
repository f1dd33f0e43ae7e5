//! HTTP server command
//!
//! Bootstraps the schema and serves the users API until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use shopd_server::db::create_pool;
use shopd_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3001)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3001")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting shopd server on {}", args.bind);

    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
