//! Runtime configuration.
//!
//! Three layers, smallest scope last:
//! - [`SiteConfig`]: gateway-level settings (port, storage path, admin
//!   passphrase, contact endpoint). Precedence: defaults < optional
//!   `config/gateway.toml` < `NEXUS_*` environment.
//! - [`UserConfig`]: optional `user_config.toml` carrying the chat API key
//!   and model so a deployment can configure chat without touching the
//!   environment.
//! - [`ChatConfig`]: the resolved chat settings handed to the pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chat::{DEFAULT_CHAT_API_URL, DEFAULT_CHAT_MODEL};
use crate::contact::DEFAULT_RELAY_ENDPOINT;

/// Shared secret for the admin gate when nothing else is configured.
/// A novelty gate, not access control; override via `NEXUS_ADMIN_PASSPHRASE`.
pub const DEFAULT_ADMIN_PASSPHRASE: &str = "Bhat@019";

/// Gateway-level configuration loaded from file and environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Application identity used in logs and the health endpoint.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Base directory for the sled content mirror.
    pub storage_path: String,
    /// Shared secret for the admin gate.
    pub admin_passphrase: String,
    /// Third-party form-relay URL for the contact card.
    pub contact_endpoint: String,
}

impl SiteConfig {
    /// Load config from file and environment. Precedence: env `NEXUS_CONFIG`
    /// path > `config/gateway.toml` > defaults; `NEXUS_*` variables override
    /// file values.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("NEXUS_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "Nexus Portfolio")?
            .set_default("port", 8019_i64)?
            .set_default("storage_path", "./data")?
            .set_default("admin_passphrase", DEFAULT_ADMIN_PASSPHRASE)?
            .set_default("contact_endpoint", DEFAULT_RELAY_ENDPOINT)?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("NEXUS").separator("__"))
            .build()?;

        built.try_deserialize()
    }

    /// Path of the sled content mirror under `storage_path`.
    pub fn content_db_path(&self) -> PathBuf {
        Path::new(&self.storage_path).join("nexus_content")
    }
}

/// User-specific configuration stored in `user_config.toml`. Lets a
/// deployment carry its own chat credentials without code or env edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Chat API key (Groq or any OpenAI-compatible provider).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Preferred chat model.
    #[serde(default)]
    pub chat_model: Option<String>,
    /// Chat completions URL override.
    #[serde(default)]
    pub chat_api_url: Option<String>,
}

impl UserConfig {
    /// Default path for the user configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("user_config.toml")
    }

    /// Load user configuration, or defaults when the file does not exist.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_path(&Self::default_path())
    }

    /// Load user configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: UserConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save user configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

/// Resolved chat settings. `api_key == None` means the widget runs offline:
/// sends surface the fixed offline message and no network call happens.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub temperature: f32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_CHAT_MODEL.to_string(),
            api_url: DEFAULT_CHAT_API_URL.to_string(),
            temperature: 0.7,
        }
    }
}

impl ChatConfig {
    /// Resolve chat settings. Priority per field: `user_config.toml` >
    /// environment (`GROQ_API_KEY`, `NEXUS_CHAT_MODEL`, `NEXUS_CHAT_API_URL`)
    /// > compiled default.
    pub fn resolve() -> Self {
        let user = UserConfig::load().unwrap_or_default();
        let api_key = user
            .api_key
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let model = user
            .chat_model
            .or_else(|| std::env::var("NEXUS_CHAT_MODEL").ok())
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string());
        let api_url = user
            .chat_api_url
            .or_else(|| std::env::var("NEXUS_CHAT_API_URL").ok())
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_CHAT_API_URL.to_string());
        Self {
            api_key,
            model,
            api_url,
            temperature: 0.7,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}
