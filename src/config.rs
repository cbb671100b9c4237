use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Citas";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "CITAS_DB_PATH";
/// Environment variable overriding the HTTP listen address.
pub const BIND_ADDR_ENV: &str = "CITAS_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "citas=info,citas_lib=info"
}

/// Get the application data directory
/// ~/Citas/ on all platforms, or ./Citas when no home directory is known.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default SQLite database file.
pub fn default_db_path() -> PathBuf {
    app_data_dir().join("citas.db")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var} value '{value}': {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
}

impl ServerConfig {
    /// Read settings from the process environment (after `.env` loading).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_ENV,
                value: raw_addr.clone(),
                source,
            })?;

        let db_path = lookup(DB_PATH_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        Ok(Self { bind_addr, db_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn db_path_under_app_data() {
        let db = default_db_path();
        assert!(db.starts_with(app_data_dir()));
        assert!(db.ends_with("citas.db"));
    }

    #[test]
    fn app_data_dir_named_after_app() {
        assert!(app_data_dir().ends_with("Citas"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(cfg.db_path, default_db_path());
    }

    #[test]
    fn env_overrides_are_used() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_ENV, "0.0.0.0:8080"),
            (DB_PATH_ENV, "/tmp/citas-test.db"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/citas-test.db"));
    }

    #[test]
    fn invalid_bind_addr_is_reported() {
        let err = ServerConfig::from_lookup(lookup_from(&[(BIND_ADDR_ENV, "not-an-addr")]))
            .unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_ENV));
    }
}
