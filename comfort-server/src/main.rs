//! Binary crate for the `comfort` dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and loading configuration
//! - Serving the dashboard endpoint
//! - Mapping dashboard failures to HTTP responses

use clap::Parser;

mod cli;
mod error;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
