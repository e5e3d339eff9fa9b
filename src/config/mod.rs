// src/config/mod.rs
// All tunables load from the environment, with .env support for development.

use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct TimecallConfig {
    // ── Gemini Configuration
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout_secs: u64,

    // ── Chat Defaults
    pub default_character: String,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── CORS Settings
    pub cors_origin: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            // Values sourced from a .env file may carry trailing comments
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

impl TimecallConfig {
    pub fn from_env() -> Self {
        // Missing .env is fine; plain environment variables still apply.
        let _ = dotenvy::dotenv();

        Self {
            gemini_api_key: env_var_or("GEMINI_API_KEY", String::new()),
            gemini_model: env_var_or("GEMINI_MODEL_NAME", "gemini-3-pro-preview".to_string()),
            gemini_base_url: env_var_or(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com/v1beta".to_string(),
            ),
            gemini_timeout_secs: env_var_or("GEMINI_TIMEOUT_SECS", 120),
            default_character: env_var_or("TIMECALL_DEFAULT_CHARACTER", "einstein".to_string()),
            host: env_var_or("TIMECALL_HOST", "127.0.0.1".to_string()),
            port: env_var_or("TIMECALL_PORT", 8080),
            cors_origin: env_var_or("TIMECALL_CORS_ORIGIN", "*".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
