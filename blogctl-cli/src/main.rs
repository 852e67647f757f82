//! blogctl CLI - run the blog server and import articles
//!
//! - `serve`: HTTP server with the article list, article pages and JSON import
//! - `import`: bulk import a local JSON file into the database

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "blogctl",
    author,
    version,
    about = "Minimal blog publishing service backed by SQLite"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces via OpenTelemetry (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (article list, article pages, JSON import)
    Serve(commands::serve::ServeArgs),
    /// Import articles from a JSON file
    Import(commands::import::ImportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Import(args) => commands::run_import(args).await,
    };

    tracing_setup::shutdown();
    result
}
