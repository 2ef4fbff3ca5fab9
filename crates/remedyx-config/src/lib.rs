//! Configuration loading for Remedyx.
//! Reads remedyx.toml from the current directory or path in REMEDYX_CONFIG env var.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "REMEDYX_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "remedyx.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub investigator: InvestigatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16    { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl ServerConfig {
    /// `(host, port)` pair for `TcpListener::bind`; hostnames such as
    /// `localhost` are resolved at bind time.
    pub fn listen_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Mock investigator settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvestigatorConfig {
    /// Fixed RNG seed for efficacy draws. Unset means seeded from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "remedyx=debug,tower_http=info,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}


impl Config {
    /// Load configuration.
    ///
    /// Checks REMEDYX_CONFIG first, then `remedyx.toml` in the current
    /// directory. A missing default file falls back to built-in defaults;
    /// a missing file named by REMEDYX_CONFIG is an error.
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let mut config = match Self::resolve_path(std::env::var(CONFIG_ENV).ok()) {
            Some(path) => Self::load_from(path)?,
            None => Config::default(),
        };

        config.apply_overrides(
            std::env::var("REMEDYX_HOST").ok(),
            std::env::var("REMEDYX_PORT").ok(),
        )?;
        Ok(config)
    }

    /// File `load` reads: the explicit path when given, otherwise
    /// `remedyx.toml` if it exists. `None` means built-in defaults.
    pub fn resolve_path(explicit: Option<String>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from(DEFAULT_CONFIG_PATH)).filter(|p| p.exists()),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply REMEDYX_HOST / REMEDYX_PORT style overrides on top of the file.
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) -> anyhow::Result<()> {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = port {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("REMEDYX_PORT is not a valid port: {port}"))?;
        }
        Ok(())
    }
}
