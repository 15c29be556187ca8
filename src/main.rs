//! Service entry-point: wires configuration, migrations, and the HTTP server.

mod server;

use std::env;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{DatabaseSettings, ServerConfig};
use signup_service::outbound::persistence::{DbPool, run_pending_migrations};

/// Port used when neither `--port` nor `PORT` supplies one.
const DEFAULT_PORT: u16 = 3000;

/// `signup-service` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "signup-service",
    about = "Account signup HTTP service backed by PostgreSQL",
    version
)]
struct CliArgs {
    /// Port to listen on. Falls back to `PORT`, then 3000.
    #[arg(long = "port", value_name = "port")]
    port: Option<u16>,
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let port = resolve_port(args.port)?;
    let database_url = resolve_database_url(args.database_url)?;
    let settings = DatabaseSettings::from_env()
        .map_err(|error| io::Error::other(format!("load database settings: {error}")))?;

    run_pending_migrations(&database_url)
        .await
        .map_err(|error| io::Error::other(format!("run database migrations: {error}")))?;

    let pool = DbPool::new(settings.pool_config(&database_url))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
    info!("database connection pool established");

    let bind_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let config = ServerConfig::new(bind_addr, pool);
    server::create_server(config)?.await
}

fn resolve_port(explicit: Option<u16>) -> io::Result<u16> {
    if let Some(value) = explicit {
        return Ok(value);
    }
    match env::var("PORT") {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<u16>().map_err(|error| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("PORT must be a valid port number: {error}"),
            )
        }),
        _ => Ok(DEFAULT_PORT),
    }
}

fn resolve_database_url(explicit: Option<String>) -> io::Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--database-url must not be empty when provided",
            ));
        }
        return Ok(value);
    }

    let from_env = env::var("DATABASE_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "database URL missing: set --database-url or DATABASE_URL",
        )
    })?;
    if from_env.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "DATABASE_URL must not be empty",
        ));
    }
    Ok(from_env)
}
