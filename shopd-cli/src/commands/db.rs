//! Database admin commands

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use shopd_server::db::{admin, create_pool};

/// Arguments for the db command group
#[derive(Args, Debug)]
pub struct DbArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Subcommand, Debug)]
pub enum DbCommand {
    /// List base tables in the public schema
    ListTables,

    /// Drop the users table and dependent rows (destructive)
    DropUsers {
        /// Confirm the drop
        #[arg(long)]
        yes: bool,
    },
}

/// Run a db admin command
pub async fn run_db(args: DbArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    match args.command {
        DbCommand::ListTables => {
            let tables = admin::list_tables(&pool)
                .await
                .context("Failed to list tables")?;
            for table in tables {
                println!("{table}");
            }
        }
        DbCommand::DropUsers { yes } => {
            if !yes {
                bail!("refusing to drop the users table without --yes");
            }
            admin::drop_users_table(&pool)
                .await
                .context("Failed to drop users table")?;
            println!("users table dropped");
        }
    }

    Ok(())
}
