//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use blogctl_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// SQLite database file
    #[arg(long, default_value = "blog.db")]
    pub db_path: PathBuf,

    /// Directory served under /static
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind_addr: args.bind,
            db_path: args.db_path,
            static_dir: args.static_dir,
            cors_permissive: args.cors_permissive,
            ..ServerConfig::default()
        }
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::from(args);
    tracing::info!(
        bind = %config.bind_addr,
        db = %config.db_path.display(),
        "Starting blogctl server"
    );

    run_server(config).await.context("Server error")?;
    Ok(())
}
