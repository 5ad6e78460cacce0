// src/config/mod.rs
// Process-wide configuration, loaded once from the environment.

use once_cell::sync::Lazy;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ObjectLensConfig {
    // ── Knowledge API Configuration
    pub wiki_api_url: String,

    // ── Classifier Configuration
    pub inference_url: String,
    pub classify_top_k: usize,

    // ── HTTP Settings
    pub request_timeout_secs: u64,
    pub user_agent: String,

    // ── Logging Configuration
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            // Tolerate inline comments and whitespace in .env values
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl ObjectLensConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            wiki_api_url: env_var_or(
                "OBJECTLENS_WIKI_API_URL",
                "https://en.wikipedia.org/w/api.php".to_string(),
            ),
            inference_url: env_var_or(
                "OBJECTLENS_INFERENCE_URL",
                "http://localhost:8501/v1/classify".to_string(),
            ),
            classify_top_k: env_var_or("OBJECTLENS_CLASSIFY_TOP_K", 5),
            request_timeout_secs: env_var_or("OBJECTLENS_REQUEST_TIMEOUT_SECS", 10),
            user_agent: env_var_or(
                "OBJECTLENS_USER_AGENT",
                format!("objectlens/{}", env!("CARGO_PKG_VERSION")),
            ),
            log_level: env_var_or("OBJECTLENS_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Bounded per-request timeout applied to every outbound call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<ObjectLensConfig> = Lazy::new(ObjectLensConfig::from_env);
