use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("PORT {0} has no next port to fall back to")]
    NoFallbackPort(u16),

    #[error("cannot build a socket address from {host}:{port}")]
    InvalidAddress { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Reads HOST, PORT and STATIC_DIR from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_with_port(self.port)
    }

    /// Address used when the configured port is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        let port = self
            .port
            .checked_add(1)
            .ok_or(ConfigError::NoFallbackPort(self.port))?;
        self.addr_with_port(port)
    }

    fn addr_with_port(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port,
            })
    }
}
