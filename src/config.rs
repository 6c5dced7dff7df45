use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from clear_mind.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Settings for the optional external content provider.
///
/// The provider is only consulted for privileged callers; when disabled or
/// unreachable the rule engine serves every request.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub enable: bool,
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enable: false,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_ms: 20_000,
        }
    }
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub http_bind: std::net::SocketAddr,
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            http_bind: "127.0.0.1:8787"
                .parse()
                .expect("default bind address should parse"),
            log_level: "clear_mind=info".to_string(),
        }
    }
}

impl RuntimeConfig {
    fn load_from_env() -> Self {
        let mut config = Self::default();

        if let Ok(bind) = std::env::var("CM_HTTP_BIND")
            && let Ok(addr) = bind.parse()
        {
            config.http_bind = addr;
        }
        if let Ok(level) = std::env::var("CM_LOG") {
            config.log_level = level;
        }

        config
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses CLEAR_MIND_CONFIG environment variable or defaults to "clear_mind.toml".
    pub fn load() -> anyhow::Result<Self> {
        let config_path =
            std::env::var("CLEAR_MIND_CONFIG").unwrap_or_else(|_| "clear_mind.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Apply env overrides for provider configuration (env-first)
        if let Ok(enable) = std::env::var("CM_PROVIDER_ENABLE") {
            config.provider.enable = enable == "1" || enable.eq_ignore_ascii_case("true");
        }
        if let Ok(base_url) = std::env::var("CM_PROVIDER_BASE_URL") {
            config.provider.base_url = base_url;
        }
        if let Ok(model) = std::env::var("CM_PROVIDER_MODEL") {
            config.provider.model = model;
        }
        if let Some(timeout_ms) = std::env::var("CM_PROVIDER_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.provider.timeout_ms = timeout_ms;
        }

        config.runtime = RuntimeConfig::load_from_env();

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.provider.enable {
            if !self.provider.base_url.starts_with("http://")
                && !self.provider.base_url.starts_with("https://")
            {
                anyhow::bail!(
                    "provider base_url '{}' must start with http:// or https://",
                    self.provider.base_url
                );
            }
            if self.provider.model.is_empty() {
                anyhow::bail!("provider model must not be empty");
            }
        }
        if self.provider.timeout_ms == 0 {
            anyhow::bail!("provider timeout_ms must be > 0");
        }
        Ok(())
    }
}
