//! ProfileMap - profile directory with a map view
//!
//! Main entry point: installs logging, loads configuration, wires the
//! application context and performs the initial profile fetch.

use anyhow::Context;
use profilemap_lib::utils::logging::init_logging;
use profilemap_lib::{load_profiles, map_scene, AppContext};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before configuration so PROFILEMAP_* variables are visible
    let dotenv = dotenvy::dotenv();

    // Logging comes from the environment so configuration loading is logged too
    let logging = profilemap_infra::config::logging_from_env();
    init_logging(&logging).context("failed to initialise logging")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => warn!(error = %e, "could not load .env file"),
    }

    let config = profilemap_infra::config::load().context("failed to load configuration")?;
    if config.logging != logging {
        warn!(
            configured = %config.logging.filter,
            active = %logging.filter,
            "logging section of the config file is ignored; set PROFILEMAP_LOG_FILTER or RUST_LOG"
        );
    }

    info!("ProfileMap starting...");
    let ctx = AppContext::new(config).context("failed to build application context")?;

    let authenticated = match ctx.start().await {
        Ok(authenticated) => authenticated,
        Err(err) => {
            warn!(error = %err, "starting signed out");
            false
        }
    };

    match load_profiles(&ctx).await {
        Ok(count) => {
            let markers = map_scene(&ctx).await.map(|scene| scene.markers.len()).unwrap_or_default();
            info!(count, markers, authenticated, "ProfileMap initialized successfully");
        }
        Err(message) => warn!(error = %message, authenticated, "initial profile load failed"),
    }

    ctx.shutdown().await;
    Ok(())
}
