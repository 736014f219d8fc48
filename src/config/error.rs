use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: failed to parse '{value}': {source}")]
    PortParseError {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid port: '{value}' (must be 1-65535)")]
    InvalidPort { value: String },

    #[error("invalid bind address: '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid {var}: failed to parse '{value}' as an integer")]
    InvalidInteger { var: &'static str, value: String },

    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
