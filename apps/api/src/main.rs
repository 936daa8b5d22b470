use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mhride_api::ConfigLoader;

fn main() -> Result<()> {
    // Logging comes up first so the loader's own events are visible.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mhride API v{}", env!("CARGO_PKG_VERSION"));

    let config = ConfigLoader::new()
        .load()
        .inspect_err(|e| match e.missing_key() {
            Some(key) => error!(key, "Required environment variable is missing"),
            None => error!("{e}"),
        })
        .context("failed to load configuration")?;

    let mode = config.deployment_mode();
    info!(
        mode = %mode,
        env_file = mode.env_file(),
        production = config.is_production(),
        "Configuration loaded"
    );
    info!(
        database = %config.database,
        redis = %config.redis_address(),
        grpc = %config.grpc_addr,
        grpc_web = %config.grpc_web_addr,
        "Service endpoints"
    );
    info!(
        email_enabled = config.email_enabled,
        sms_enabled = config.sms_enabled,
        "Notification channels"
    );
    tracing::debug!(?config, "Full configuration");

    Ok(())
}
