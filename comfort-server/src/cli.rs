use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfort_core::{Config, DashboardService};
use inquire::{CustomType, Password};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::routes::{self, AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "comfort", version, about = "Weather comfort dashboard")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the dashboard over HTTP.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "0.0.0.0:3000")]
        bind: String,
    },

    /// Compute the dashboard once and print it as JSON.
    Show,

    /// Store the API key and location in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Serve { ref bind } => {
                let service = DashboardService::from_config(&self.load_config()?)?;
                serve(Arc::new(service), bind).await
            }
            Command::Show => {
                let service = DashboardService::from_config(&self.load_config()?)?;
                let payload = service.dashboard().await?;
                println!("{}", serde_json::to_string_pretty(&payload)?);
                Ok(())
            }
            Command::Configure => self.configure(),
        }
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path(),
        }
    }

    /// File config (if any) with the environment applied on top.
    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => {
                let mut cfg = Config::load_from(path)?;
                cfg.apply_env(|name| std::env::var(name).ok());
                Ok(cfg)
            }
            None => Config::load(),
        }
    }

    fn configure(&self) -> Result<()> {
        let path = self.config_path()?;
        let mut cfg = if path.exists() { Config::load_from(&path)? } else { Config::default() };

        let api_key = Password::new("OpenWeather API key:")
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?;
        let latitude = CustomType::<f64>::new("Latitude:")
            .with_default(cfg.location.latitude)
            .prompt()
            .context("Failed to read latitude")?;
        let longitude = CustomType::<f64>::new("Longitude:")
            .with_default(cfg.location.longitude)
            .prompt()
            .context("Failed to read longitude")?;

        cfg.api_key = Some(api_key.trim().to_string());
        cfg.location.latitude = latitude;
        cfg.location.longitude = longitude;
        cfg.save_to(&path)?;

        println!("Saved configuration to {}", path.display());
        Ok(())
    }
}

async fn bind_listener(addr: &str) -> Result<TcpListener> {
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(err) if err.kind() == std::io::ErrorKind::AddrInUse => {
            anyhow::bail!(
                "Failed to bind comfort listener on {addr}: port already in use. Re-run with --bind to choose another address.",
            );
        }
        Err(err) => Err(err).with_context(|| format!("failed to bind comfort listener on {addr}")),
    }
}

async fn serve(dashboard: Arc<DashboardService>, bind: &str) -> Result<()> {
    let listener = bind_listener(bind).await?;
    tracing::info!(addr = %bind, "comfort dashboard listening");

    let app = routes::router(AppState { dashboard });
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
