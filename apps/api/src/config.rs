use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::llm_client::{gemini, groq, Backend};

const DEFAULT_SECRETS_PATH: &str = ".secrets.toml";

/// Application configuration, read once at startup and passed explicitly to the assistant.
///
/// Backend credentials are optional: a missing key marks that backend unavailable
/// instead of failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub gemini_api_base: String,
    pub groq_api_base: String,
    pub backend_timeout: Duration,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Deployment secret store. Values here win over environment variables.
#[derive(Debug, Default, Deserialize)]
pub struct SecretStore {
    gemini_api_key: Option<String>,
    groq_api_key: Option<String>,
}

impl SecretStore {
    /// Loads the TOML secrets file. A missing file is an empty store; a broken one is
    /// logged and ignored so the environment can still supply credentials.
    pub fn load(path: &Path) -> SecretStore {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SecretStore::default(),
            Err(e) => {
                warn!("Ignoring unreadable secrets file {}: {e}", path.display());
                return SecretStore::default();
            }
        };

        toml::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring malformed secrets file {}: {e}", path.display());
            SecretStore::default()
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let secrets_path = std::env::var("SECRETS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_PATH));
        let secrets = SecretStore::load(&secrets_path);

        Self::from_sources(&secrets, |key| std::env::var(key).ok())
    }

    /// Resolves every setting from the secret store first, then `env`.
    pub fn from_sources(secrets: &SecretStore, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let credential = |secret: &Option<String>, key: &str| {
            non_blank(secret.clone()).or_else(|| non_blank(env(key)))
        };

        Ok(Config {
            gemini_api_key: credential(&secrets.gemini_api_key, "GEMINI_API_KEY"),
            groq_api_key: credential(&secrets.groq_api_key, "GROQ_API_KEY"),
            gemini_api_base: non_blank(env("GEMINI_API_BASE"))
                .unwrap_or_else(|| gemini::DEFAULT_API_BASE.to_string()),
            groq_api_base: non_blank(env("GROQ_API_BASE"))
                .unwrap_or_else(|| groq::DEFAULT_API_BASE.to_string()),
            backend_timeout: Duration::from_secs(
                env("BACKEND_TIMEOUT_SECS")
                    .unwrap_or_else(|| "90".to_string())
                    .parse::<u64>()
                    .context("BACKEND_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_upload_bytes: env("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|| "10485760".to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn is_configured(&self, backend: Backend) -> bool {
        match backend {
            Backend::Gemini => self.gemini_api_key.is_some(),
            Backend::Groq => self.groq_api_key.is_some(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_any_source() {
        let config = Config::from_sources(&SecretStore::default(), env_from(&[])).unwrap();
        assert!(config.gemini_api_key.is_none());
        assert!(config.groq_api_key.is_none());
        assert!(!config.is_configured(Backend::Gemini));
        assert_eq!(config.port, 8080);
        assert_eq!(config.backend_timeout, Duration::from_secs(90));
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.gemini_api_base, gemini::DEFAULT_API_BASE);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_secret_store_wins_over_environment() {
        let secrets = SecretStore {
            gemini_api_key: Some("from-secrets".to_string()),
            groq_api_key: None,
        };
        let env = env_from(&[("GEMINI_API_KEY", "from-env"), ("GROQ_API_KEY", "groq-env")]);
        let config = Config::from_sources(&secrets, env).unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("from-secrets"));
        assert_eq!(config.groq_api_key.as_deref(), Some("groq-env"));
    }

    #[test]
    fn test_blank_credentials_count_as_missing() {
        let secrets = SecretStore {
            gemini_api_key: Some("   ".to_string()),
            groq_api_key: None,
        };
        let env = env_from(&[("GEMINI_API_KEY", "env-key"), ("GROQ_API_KEY", "")]);
        let config = Config::from_sources(&secrets, env).unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("env-key"));
        assert!(!config.is_configured(Backend::Groq));
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let result = Config::from_sources(&SecretStore::default(), env_from(&[("PORT", "http")]));
        assert!(result.is_err());
        let result = Config::from_sources(
            &SecretStore::default(),
            env_from(&[("BACKEND_TIMEOUT_SECS", "-1")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_secret_store_loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gemini_api_key = \"g-key\"\ngroq_api_key = \"q-key\"").unwrap();
        let store = SecretStore::load(file.path());
        assert_eq!(store.gemini_api_key.as_deref(), Some("g-key"));
        assert_eq!(store.groq_api_key.as_deref(), Some("q-key"));
    }

    #[test]
    fn test_missing_or_malformed_secrets_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SecretStore::load(&dir.path().join("absent.toml"));
        assert!(store.gemini_api_key.is_none());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gemini_api_key = [unterminated").unwrap();
        let store = SecretStore::load(file.path());
        assert!(store.gemini_api_key.is_none());
    }
}
