use cysafe_common::error::{CysafeError, CysafeResult};
use serde::Deserialize;
use std::env;

/// Which link-checker backend the API should use.
pub const CLASSIFIER_PATTERNS: &str = "patterns";
pub const CLASSIFIER_GEMINI: &str = "gemini";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub patterns_path: String,
    pub classifier: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads the vars.
    pub fn from_env() -> CysafeResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let classifier = get_var_or("CLASSIFIER", CLASSIFIER_PATTERNS);
        if classifier != CLASSIFIER_PATTERNS && classifier != CLASSIFIER_GEMINI {
            return Err(CysafeError::Config(format!(
                "unknown CLASSIFIER: {classifier} (expected '{CLASSIFIER_PATTERNS}' or '{CLASSIFIER_GEMINI}')"
            )));
        }

        Ok(Self {
            database_url: get_var_or("DATABASE_URL", "sqlite://cysafe.db?mode=rwc"),
            patterns_path: get_var_or("PATTERNS_PATH", "patterns.csv"),
            classifier,
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|v| !v.is_empty()),
            gemini_model: get_var_or("GEMINI_MODEL", "gemini-1.5-flash"),
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "8080")
                .parse()
                .map_err(|e| CysafeError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_from_env_uses_defaults() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        for key in ["DATABASE_URL", "PATTERNS_PATH", "CLASSIFIER", "PORT"] {
            env::remove_var(key);
        }

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.database_url, "sqlite://cysafe.db?mode=rwc");
        assert_eq!(cfg.patterns_path, "patterns.csv");
        assert_eq!(cfg.classifier, CLASSIFIER_PATTERNS);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn config_from_env_rejects_unknown_classifier() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("CLASSIFIER", "oracle");
        let result = AppConfig::from_env();
        env::remove_var("CLASSIFIER");
        assert!(result.is_err());
    }

    #[test]
    fn config_from_env_rejects_bad_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("PORT", "not-a-port");
        let result = AppConfig::from_env();
        env::remove_var("PORT");
        assert!(result.is_err());
    }

    #[test]
    fn empty_gemini_key_reads_as_unset() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("GEMINI_API_KEY", "");
        let cfg = AppConfig::from_env().expect("should parse config");
        env::remove_var("GEMINI_API_KEY");
        assert!(cfg.gemini_api_key.is_none());
    }

    #[test]
    fn bind_addr_formats_correctly() {
        let cfg = AppConfig {
            database_url: String::new(),
            patterns_path: String::new(),
            classifier: CLASSIFIER_PATTERNS.to_owned(),
            gemini_api_key: None,
            gemini_model: String::new(),
            host: "127.0.0.1".to_owned(),
            port: 3000,
            log_level: "debug".to_owned(),
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }
}
