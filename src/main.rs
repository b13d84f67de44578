//! Geo Processor server: centroid and bounding box for a list of points.
//!
//! Main entry point that loads configuration, initialises logging and
//! serves the API until a shutdown signal arrives.

use std::future::IntoFuture;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use geoproc_api::AppState;
use geoproc_core::config::AppConfig;

/// Command-line options. Flags override values from configuration files.
#[derive(Debug, Parser)]
#[command(name = "geoproc-server", version, about)]
struct Cli {
    /// Environment name; selects `config/<env>.toml`.
    #[arg(long, env = "GEOPROC_ENV", default_value = "development")]
    env: String,
    /// Directory holding `default.toml` and environment overlays.
    #[arg(long, default_value = "config")]
    config_dir: String,
    /// Bind address override.
    #[arg(long)]
    host: Option<String>,
    /// Bind port override.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e:#}");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment, then apply CLI overrides.
fn load_configuration(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(&cli.config_dir, &cli.env)
        .with_context(|| format!("reading '{}' (env: {})", cli.config_dir, cli.env))?;

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Geo Processor v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app = geoproc_api::build_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Geo Processor listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, draining in-flight requests...");
        let _ = shutdown_tx.send(true);
    });

    let drain_deadline = async move {
        let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server.into_future() => result.context("HTTP server failed")?,
        _ = drain_deadline => {
            tracing::warn!("Shutdown grace period of {}s elapsed, exiting", grace.as_secs());
        }
    }

    tracing::info!("Geo Processor shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
