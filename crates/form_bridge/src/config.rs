use std::env;

use reqwest::Url;

use crate::error::BridgeError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_API_PATH: &str = "/api/treatment";

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Origin the page was served from, e.g. http://127.0.0.1:5000
    pub base_url: Url,
    /// Path of the treatment endpoint on that origin
    pub api_path: String,
}

impl BridgeConfig {
    pub fn new(base_url: &str, api_path: &str) -> Result<Self, BridgeError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BridgeError::Config(format!("invalid base url {base_url}: {e}")))?;
        let cfg = Self {
            base_url,
            api_path: api_path.to_string(),
        };
        cfg.endpoint()?;
        Ok(cfg)
    }

    /// Read TREATMENT_API_BASE_URL / TREATMENT_API_PATH, loading `.env` first
    /// when one exists.
    pub fn from_env() -> Result<Self, BridgeError> {
        let _ = dotenvy::dotenv();
        let base_url =
            env::var("TREATMENT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_path =
            env::var("TREATMENT_API_PATH").unwrap_or_else(|_| DEFAULT_API_PATH.to_string());
        Self::new(&base_url, &api_path)
    }

    pub fn endpoint(&self) -> Result<Url, BridgeError> {
        self.base_url
            .join(&self.api_path)
            .map_err(|e| BridgeError::Config(format!("invalid api path {}: {e}", self.api_path)))
    }
}
