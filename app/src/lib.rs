pub mod app;
pub mod background;
pub mod config;
pub mod notification;
pub mod server;

use config::AppConfig;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load and validate runtime configuration.
pub fn init_foundation() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Settings loaded (port={}, endpoint={})",
        config.server_port,
        config.endpoint_url
    );
    Ok(config)
}
