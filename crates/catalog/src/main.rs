//! Larder maintenance daemon.
//!
//! Runs the retention purge against the shared catalog database and upload
//! root. The HTTP control plane is a separate service; this binary only owns
//! the unattended background work.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use larder_catalog::AppState;
use larder_catalog::purge::spawn_purge_scheduler;
use larder_core::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Larder - personal inventory catalog maintenance daemon
#[derive(Parser, Debug)]
#[command(name = "larderd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "LARDER_CONFIG",
        default_value = "config/larder.toml"
    )]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Larder v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration (file is optional, env vars can provide/override everything)
    let config_path = std::path::Path::new(&args.config);
    let mut figment = Figment::new();
    let has_config_file = config_path.exists();

    if has_config_file {
        tracing::info!(config_path = %args.config, "Loading configuration from file");
        figment = figment.merge(Toml::file(&args.config));
    } else {
        tracing::debug!("No config file found at {}", args.config);
    }

    let has_env_config =
        std::env::vars().any(|(key, _)| key.starts_with("LARDER_") && key != "LARDER_CONFIG");

    if !has_config_file && !has_env_config {
        tracing::info!("No configuration provided, using built-in defaults");
    } else if !has_config_file {
        tracing::info!("Using environment variables for configuration");
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("LARDER_").split("__"))
        .extract()
        .context("failed to load configuration")?;

    // Initialize the upload store
    let storage = larder_storage::from_config(&config.storage)
        .await
        .context("failed to initialize upload store")?;
    storage
        .health_check()
        .await
        .context("upload store health check failed")?;
    tracing::info!(upload_dir = %config.storage.upload_dir.display(), "Upload store initialized");

    // Initialize the metadata store
    let metadata = larder_metadata::from_config(&config.metadata)
        .await
        .context("failed to initialize metadata store")?;
    metadata
        .health_check()
        .await
        .context("metadata store health check failed")?;
    tracing::info!("Metadata store initialized");

    // Create application state
    let state = AppState::new(config, storage, metadata);

    // Spawn the retention purge scheduler if enabled
    let _purge_handle = if state.config.purge.enabled {
        Some(spawn_purge_scheduler(
            state.metadata.clone(),
            state.cascade_engine(),
            state.config.purge.clone(),
        ))
    } else {
        tracing::info!("Retention purge disabled");
        None
    };

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("Shutting down");

    Ok(())
}
