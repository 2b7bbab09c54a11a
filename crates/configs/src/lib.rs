use std::io;

use anyhow::anyhow;
use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default)]
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format(), filter: None }
    }
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_log_format() -> String { "compact".to_string() }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

/// Load `path`, falling back to the environment only when the file does not
/// exist. Unreadable or malformed files are errors.
pub fn load_or_env(path: &str) -> Result<AppConfig> {
    match load_from_file(path) {
        Ok(cfg) => Ok(cfg),
        Err(e) if is_missing_file(&e) => Ok(from_env()),
        Err(e) => Err(e.context(format!("cannot load config file {path}"))),
    }
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.root_cause()
        .downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

/// Build a config purely from `SERVER_HOST`, `SERVER_PORT` and `LOG_FORMAT`.
pub fn from_env() -> AppConfig {
    from_vars(|key| std::env::var(key).ok())
}

/// `from_env` over an arbitrary variable lookup. An unparsable port falls
/// back to the default.
pub fn from_vars<F>(get: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let host = get("SERVER_HOST").unwrap_or_else(default_host);
    let port = get("SERVER_PORT")
        .and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let format = get("LOG_FORMAT").unwrap_or_else(default_log_format);
    AppConfig {
        server: ServerConfig { host, port, worker_threads: None },
        logging: LoggingConfig { format, filter: None },
    }
}

impl AppConfig {
    /// Config file at `CONFIG_PATH` if present, environment otherwise;
    /// always normalized.
    pub fn load_and_validate() -> Result<Self> {
        Self::load_and_validate_from(&config_path())
    }

    pub fn load_and_validate_from(path: &str) -> Result<Self> {
        let mut cfg = load_or_env(path)?;
        cfg.normalize_and_validate()
            .with_context(|| format!("invalid config from {path}"))?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.logging.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        match self.format.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" | "pretty" | "json" => Ok(()),
            other => Err(anyhow!("logging.format must be compact or json, got {other:?}")),
        }
    }
}
