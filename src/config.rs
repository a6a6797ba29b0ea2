use std::env;
use std::path::PathBuf;

/// Upstream endpoint for the rijksoverheid school-holiday dataset. The
/// school year is appended as a path segment per request.
pub const DEFAULT_API_BASE_URL: &str =
    "https://opendata.rijksoverheid.nl/v1/sources/rijksoverheid/infotypes/schoolholidays";

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let data_dir = env::var("VAKANTIETELLER_DATA_DIR")
            .unwrap_or_else(|_| ".vakantieteller".to_string())
            .into();

        let api_base_url =
            env::var("VAKANTIETELLER_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let request_timeout_secs = env::var("VAKANTIETELLER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        Ok(Config {
            data_dir,
            api_base_url,
            request_timeout_secs,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid request timeout")]
    InvalidTimeout,
}
