use std::{env, path::PathBuf};

const DEFAULT_ACCOUNT_HOST: &str = "europe.api.riotgames.com";
const DEFAULT_PLATFORM_HOST: &str = "euw1.api.riotgames.com";

/// Process configuration, read once at startup and passed to the services
/// explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub account_host: String,
    pub platform_host: String,
    pub assets_dir: PathBuf,
}

impl AppConfig {
    /// Loads `.env` if present, then the environment. A missing API key is
    /// not an error here; the first remote call fails with the service's own
    /// auth error instead.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            api_key: env::var("RIOT_API_KEY").unwrap_or_default(),
            account_host: env::var("RIOT_ACCOUNT_HOST").unwrap_or_else(|_| DEFAULT_ACCOUNT_HOST.to_string()),
            platform_host: env::var("RIOT_PLATFORM_HOST").unwrap_or_else(|_| DEFAULT_PLATFORM_HOST.to_string()),
            assets_dir: env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets")),
        }
    }
}
