//! todoctl CLI - run and administer the todo API server
//!
//! Two subcommands:
//! - `serve` creates the database pool, runs migrations, and starts the
//!   HTTP server
//! - `migrate` runs migrations and exits

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use todoctl_core::AppConfig;
use todoctl_server::db::{create_pool, migrations};
use todoctl_server::http::{run_server, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "todoctl",
    author,
    version,
    about = "Todo CRUD API server over a pooled Postgres store"
)]
struct Cli {
    /// Path to the config file (default: ~/.todoctl/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run migrations and start the HTTP server
    Serve(ServeArgs),
    /// Run migrations and exit
    Migrate,
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Override the configured bind address
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config =
        AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::Serve(args) => serve(config, args).await,
        Commands::Migrate => migrate(config).await,
    }
}

async fn serve(config: AppConfig, args: ServeArgs) -> Result<()> {
    // The pool is created exactly once here and shared for the whole
    // process lifetime.
    let pool = create_pool(&config.database)
        .await
        .context("failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("failed to run migrations")?;

    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config
            .bind_addr()
            .parse()
            .context("invalid server.host/server.port in config")?,
    };

    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: config.server.cors_permissive,
        log_statements: config.database.log_statements,
    };

    run_server(pool, server_config)
        .await
        .context("server exited with an error")?;

    Ok(())
}

async fn migrate(config: AppConfig) -> Result<()> {
    let pool = create_pool(&config.database)
        .await
        .context("failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("failed to run migrations")?;

    info!("migrations applied");
    Ok(())
}
