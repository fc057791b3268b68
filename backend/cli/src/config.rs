use std::path::PathBuf;

use shelfscan_core::ScanError;
use shelfscan_understanding::VisionProvider;

/// Shelfscan runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI-compatible endpoint serving the vision model,
    /// e.g. `http://localhost:8000/v1`
    pub vision_url: Option<String>,
    /// Model id requested from the compatible endpoint
    pub vision_model: String,
    /// API key for the compatible endpoint (many local servers skip auth)
    pub vision_api_key: Option<String>,
    /// Hosted OpenAI API key
    pub openai_api_key: Option<String>,
    /// Hosted Gemini API key
    pub gemini_api_key: Option<String>,
    /// Report artifact path
    pub report_path: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vision_url: None,
            vision_model: "Qwen/Qwen2-VL-2B-Instruct".to_string(),
            vision_api_key: None,
            openai_api_key: None,
            gemini_api_key: None,
            report_path: PathBuf::from("product_analysis.csv"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            vision_url: std::env::var("SHELFSCAN_VISION_URL").ok(),
            vision_model: std::env::var("SHELFSCAN_VISION_MODEL")
                .unwrap_or_else(|_| "Qwen/Qwen2-VL-2B-Instruct".to_string()),
            vision_api_key: std::env::var("SHELFSCAN_API_KEY").ok(),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            report_path: std::env::var("SHELFSCAN_REPORT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("product_analysis.csv")),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Resolve the configured vision provider.
    ///
    /// Priority: compatible endpoint, then OpenAI, then Gemini. With no
    /// credentials at all this is a startup-fatal configuration error.
    pub fn provider(&self) -> Result<VisionProvider, ScanError> {
        if let Some(url) = &self.vision_url {
            return Ok(VisionProvider::compatible(
                url,
                self.vision_api_key.clone(),
                &self.vision_model,
            ));
        }
        if let Some(key) = &self.openai_api_key {
            return Ok(VisionProvider::openai(key));
        }
        if let Some(key) = &self.gemini_api_key {
            return Ok(VisionProvider::gemini(key));
        }
        Err(ScanError::ConfigError(
            "no vision provider configured; set SHELFSCAN_VISION_URL, OPENAI_API_KEY, or GEMINI_API_KEY".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_prefers_compatible_endpoint() {
        let config = Config {
            vision_url: Some("http://localhost:8000/v1".to_string()),
            openai_api_key: Some("sk-unused".to_string()),
            ..Config::default()
        };
        assert_eq!(config.provider().unwrap().name(), "compatible");
    }

    #[test]
    fn provider_requires_some_credential() {
        let err = Config::default().provider().unwrap_err();
        assert!(matches!(err, ScanError::ConfigError(_)));
    }
}
