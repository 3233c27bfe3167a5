//! HTTP server command
//!
//! Connects to the cars database and serves the listing endpoints.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use carquery_server::db::create_pool;
use carquery_server::http::{run_server, ServerConfig};
use carquery_server::DbSettings;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CARQUERY_BIND", default_value = "0.0.0.0:1323")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Database connection flags
#[derive(Parser, Debug, Clone)]
pub struct DbArgs {
    /// Full connection string (overrides the individual settings below)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "PGHOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "PGPORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "PGUSER", default_value = "sqlbuilderuser")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "PGPASSWORD", default_value = "password", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "PGDATABASE", default_value = "sqlbuildertest")]
    pub db_name: String,

    /// Session time zone
    #[arg(long, env = "CARQUERY_TIMEZONE", default_value = "Asia/Jakarta")]
    pub timezone: String,
}

impl From<DbArgs> for DbSettings {
    fn from(args: DbArgs) -> Self {
        Self {
            host: args.db_host,
            port: args.db_port,
            user: args.db_user,
            password: args.db_password,
            database: args.db_name,
            timezone: args.timezone,
            url: args.database_url,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let settings = DbSettings::from(args.db);

    tracing::info!(
        database = %settings.display_target(),
        "Starting carquery server on {}",
        args.bind
    );

    let pool = create_pool(&settings)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
