//! shopd CLI - users API server and database utilities
//!
//! Subcommands:
//! - `serve` - run the HTTP server
//! - `db list-tables` - show base tables in the public schema
//! - `db drop-users` - drop the users table (destructive)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::{db, serve};
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(name = "shopd", version, about = "Users API server and database utilities")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Database admin utilities
    Db(db::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await,
        Commands::Db(args) => db::run_db(args).await,
    }
}
