use anyhow::{Context, Result};
use geminichat::{api::GeminiClient, config::Config, logging::init_logging, ui::run_ui};
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _logger = init_logging("info").context("Failed to initialise logging")?;

    let config = Config::from_env();
    config.validate()?;
    if !config.has_valid_key() {
        warn!("GEMINI_API_KEY is not set; replies will ask for a key");
    }
    info!("Starting chat with model {}", config.model);

    run_ui(GeminiClient::new(config))
        .await
        .context("Terminal UI failed")?;

    info!("Chat closed");
    Ok(())
}
