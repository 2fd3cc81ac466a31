use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub session: SessionConfig,
    /// Admin credentials, environment-only (`ADMIN_USER` / `ADMIN_PASS`).
    /// `None` means every write is rejected.
    #[serde(skip)]
    pub admin: Option<AdminCredentials>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Base URL of the blob backend; empty disables remote reads
    #[serde(default)]
    pub base_url: String,

    /// Logical key the price document is stored under
    #[serde(default = "default_storage_key")]
    pub key: String,

    #[serde(default = "default_storage_timeout")]
    pub timeout_seconds: u64,

    /// Storage access token, environment-only (`BLOB_READ_WRITE_TOKEN`).
    /// Absence blocks writes; reads degrade to the built-in default.
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            key: default_storage_key(),
            timeout_seconds: default_storage_timeout(),
            token: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_ttl")]
    pub ttl_minutes: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_session_ttl(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub user: String,
    pub pass: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage_key() -> String {
    "prices.json".to_string()
}

fn default_storage_timeout() -> u64 {
    10
}

fn default_session_ttl() -> u64 {
    720
}

pub fn load_config() -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("TILE_QUOTE").separator("__"))
        .build()?;

    let mut cfg: Config = config.try_deserialize()?;
    cfg.admin = admin_from_env();
    cfg.storage.token = env::var("BLOB_READ_WRITE_TOKEN").ok().filter(|t| !t.is_empty());
    validate_config(&cfg)?;

    Ok(cfg)
}

/// Missing or empty credentials mean deny-all, never match-empty-string.
fn admin_from_env() -> Option<AdminCredentials> {
    let user = env::var("ADMIN_USER").ok().filter(|v| !v.is_empty())?;
    let pass = env::var("ADMIN_PASS").ok().filter(|v| !v.is_empty())?;
    Some(AdminCredentials { user, pass })
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.storage.key.is_empty() {
        anyhow::bail!("storage key cannot be empty");
    }

    if cfg.storage.timeout_seconds == 0 {
        anyhow::bail!("storage timeout must be positive");
    }

    if cfg.storage.token.is_some() && cfg.storage.base_url.is_empty() {
        anyhow::bail!("storage base_url must be set when BLOB_READ_WRITE_TOKEN is configured");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.storage.key, "prices.json");
        assert_eq!(cfg.storage.timeout_seconds, 10);
        assert_eq!(cfg.session.ttl_minutes, 720);
        assert!(cfg.admin.is_none());
        assert!(cfg.storage.token.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let mut cfg = Config::default();
        cfg.storage.key = String::new();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_token_without_base_url() {
        let mut cfg = Config::default();
        cfg.storage.token = Some("blob-token".to_string());
        assert!(validate_config(&cfg).is_err());

        cfg.storage.base_url = "https://blob.example.com".to_string();
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_secrets_never_serialize() {
        let mut cfg = Config::default();
        cfg.admin = Some(AdminCredentials {
            user: "admin".to_string(),
            pass: "secret".to_string(),
        });
        cfg.storage.token = Some("blob-token".to_string());

        let dump = toml::to_string_pretty(&cfg).unwrap();
        assert!(!dump.contains("secret"));
        assert!(!dump.contains("blob-token"));
    }
}
