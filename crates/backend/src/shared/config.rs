use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Statistics API root, e.g. "http://host:6969/api"
    pub base_url: String,
    /// Credential injected as `key`; when unset the client's `key` is forwarded
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Environment variable overriding `upstream.api_key`
pub const API_KEY_ENV: &str = "DASHBOARD_UPSTREAM_KEY";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[upstream]
base_url = "http://109.73.206.144:6969/api"
timeout_secs = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `DASHBOARD_UPSTREAM_KEY` is applied on top of either.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match config_path_next_to_exe() {
        Some(config_path) if config_path.exists() => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            parse_config(&contents)?
        }
        Some(config_path) => {
            tracing::warn!("config.toml not found at: {}", config_path.display());
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };

    config.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
    Ok(config)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn config_path_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("config.toml"))
}

impl Config {
    /// Non-empty `key` replaces whatever the file said
    pub fn apply_api_key_override(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.is_empty()) {
            tracing::info!("Upstream api key taken from {}", API_KEY_ENV);
            self.upstream.api_key = Some(key);
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
