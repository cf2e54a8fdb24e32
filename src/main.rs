//! Meltemi Studio site server - main entry point.
//!
//! Loads configuration, wires the provider client into the submission
//! service, and serves the contact endpoint until shutdown.

use anyhow::Result;
use meltemi_site::resend::{Mailer, ResendClient, ResendMailer};
use meltemi_site::server::{self, AppState};
use meltemi_site::services::{SubmissionService, SubmissionServiceImpl};
use meltemi_site::Config;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first so LOG_LEVEL can seed the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins over the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded");
    info!("Email provider base URL: {}", config.resend_base_url);

    let client = ResendClient::new(&config);
    let mailer = Arc::new(ResendMailer::new(client)) as Arc<dyn Mailer>;
    let service =
        Arc::new(SubmissionServiceImpl::new(mailer, &config)) as Arc<dyn SubmissionService>;

    let state = AppState {
        service,
        config: Arc::new(config),
    };

    info!("Contact pipeline initialized");
    server::run_server(state).await?;

    info!("Shutdown complete");
    Ok(())
}
