//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `TENDREL_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::DEFAULT_TOP_K;

/// Process configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TENDREL_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path to the JSON catalog index. Default: `./data/global_index.json`.
    pub catalog_path: PathBuf,

    /// Path to the precomputed embedding matrix (`.npy`).
    /// Default: `./data/global_embeddings.npy`.
    pub embeddings_path: PathBuf,

    /// Optional JSON keyword-rules file; the built-in table is used when
    /// unset.
    pub rules_path: Option<PathBuf>,

    /// Optional HTTP encoder endpoint; the deterministic stub encoder is
    /// used when unset.
    pub encoder_url: Option<String>,

    /// Default top-K per sub-query. Default: `5`.
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            catalog_path: PathBuf::from("./data/global_index.json"),
            embeddings_path: PathBuf::from("./data/global_embeddings.npy"),
            rules_path: None,
            encoder_url: None,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "TENDREL_PORT";
    const ENV_BIND_ADDR: &'static str = "TENDREL_BIND_ADDR";
    const ENV_CATALOG_PATH: &'static str = "TENDREL_CATALOG_PATH";
    const ENV_EMBEDDINGS_PATH: &'static str = "TENDREL_EMBEDDINGS_PATH";
    const ENV_RULES_PATH: &'static str = "TENDREL_RULES_PATH";
    const ENV_ENCODER_URL: &'static str = "TENDREL_ENCODER_URL";
    const ENV_TOP_K: &'static str = "TENDREL_TOP_K";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let catalog_path = Self::path_from_env(Self::ENV_CATALOG_PATH, defaults.catalog_path);
        let embeddings_path =
            Self::path_from_env(Self::ENV_EMBEDDINGS_PATH, defaults.embeddings_path);
        let rules_path = Self::optional_path_from_env(Self::ENV_RULES_PATH);
        let encoder_url = env::var(Self::ENV_ENCODER_URL).ok().filter(|v| !v.is_empty());
        let top_k = Self::parse_usize_from_env(Self::ENV_TOP_K, defaults.top_k)?;

        Ok(Self {
            port,
            bind_addr,
            catalog_path,
            embeddings_path,
            rules_path,
            encoder_url,
            top_k,
        })
    }

    /// Validates paths (does not read them).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for path in [&self.catalog_path, &self.embeddings_path] {
            if path.exists() && !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if let Some(ref path) = self.rules_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    var: Self::ENV_PORT,
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(var: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var) {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidInteger { var, value }),
            Err(_) => Ok(default),
        }
    }

    fn path_from_env(var: &str, default: PathBuf) -> PathBuf {
        env::var(var).map(PathBuf::from).unwrap_or(default)
    }

    fn optional_path_from_env(var: &str) -> Option<PathBuf> {
        env::var(var).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
    }
}
