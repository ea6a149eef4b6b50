//! Centralized configuration for Workbench.
//!
//! All tunable parameters are defined here to avoid hard-coded values
//! scattered throughout the route handlers.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::{Result, WorkbenchError};

/// Central configuration for all Workbench components.
///
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkbenchConfig {
    pub server: ServerConfig,
    pub fixtures: FixtureConfig,
    pub pagination: PaginationConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Listener address in `host:port` form, hostnames allowed.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Locations of on-disk inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Directory holding `*.json` fixtures
    pub fixtures_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: PathBuf::from("mock_data"),
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Rows per page in tabular lists unless overridden.
pub const DEFAULT_TABLE_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(25).unwrap();

/// Cards per page in card grids unless overridden.
pub const DEFAULT_GRID_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// Page sizes per view kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Rows per page in tabular lists
    pub table_page_size: NonZeroUsize,
    /// Cards per page in card grids
    pub grid_page_size: NonZeroUsize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            table_page_size: DEFAULT_TABLE_PAGE_SIZE,
            grid_page_size: DEFAULT_GRID_PAGE_SIZE,
        }
    }
}

impl WorkbenchConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// # Errors
    /// - `WorkbenchError::Configuration` - An override is set but malformed
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// Recognized keys: `WORKBENCH_HOST`, `WORKBENCH_PORT`,
    /// `WORKBENCH_FIXTURES_DIR`, `WORKBENCH_STATIC_DIR`,
    /// `WORKBENCH_TABLE_PAGE_SIZE` and `WORKBENCH_GRID_PAGE_SIZE`.
    ///
    /// # Errors
    /// - `WorkbenchError::Configuration` - An override is set but malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("WORKBENCH_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("WORKBENCH_PORT") {
            config.server.port = parse_override("WORKBENCH_PORT", &port)?;
        }
        if let Some(dir) = lookup("WORKBENCH_FIXTURES_DIR") {
            config.fixtures.fixtures_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("WORKBENCH_STATIC_DIR") {
            config.fixtures.static_dir = PathBuf::from(dir);
        }
        if let Some(size) = lookup("WORKBENCH_TABLE_PAGE_SIZE") {
            config.pagination.table_page_size =
                parse_override("WORKBENCH_TABLE_PAGE_SIZE", &size)?;
        }
        if let Some(size) = lookup("WORKBENCH_GRID_PAGE_SIZE") {
            config.pagination.grid_page_size = parse_override("WORKBENCH_GRID_PAGE_SIZE", &size)?;
        }

        Ok(config)
    }
}

fn parse_override<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| WorkbenchError::Configuration {
            reason: format!("{key}={raw}: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_values() {
        let config = WorkbenchConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.fixtures.fixtures_dir, PathBuf::from("mock_data"));
        assert_eq!(config.pagination.table_page_size.get(), 25);
        assert_eq!(config.pagination.grid_page_size.get(), 4);
        assert_eq!(config.pagination.table_page_size, DEFAULT_TABLE_PAGE_SIZE);
        assert_eq!(config.pagination.grid_page_size, DEFAULT_GRID_PAGE_SIZE);
    }

    #[test]
    fn test_overrides_applied() {
        let config = WorkbenchConfig::from_lookup(lookup(&[
            ("WORKBENCH_HOST", "0.0.0.0"),
            ("WORKBENCH_PORT", "8080"),
            ("WORKBENCH_FIXTURES_DIR", "/srv/fixtures"),
            ("WORKBENCH_GRID_PAGE_SIZE", "6"),
        ]))
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.fixtures.fixtures_dir, PathBuf::from("/srv/fixtures"));
        assert_eq!(config.fixtures.static_dir, PathBuf::from("static"));
        assert_eq!(config.pagination.grid_page_size.get(), 6);
        assert_eq!(config.pagination.table_page_size.get(), 25);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = WorkbenchConfig::from_lookup(lookup(&[("WORKBENCH_TABLE_PAGE_SIZE", "0")]))
            .unwrap_err();
        assert!(err.is_user_error());
        assert!(err.to_string().contains("WORKBENCH_TABLE_PAGE_SIZE"));
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(WorkbenchConfig::from_lookup(lookup(&[("WORKBENCH_PORT", "http")])).is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 8000,
        };
        assert_eq!(config.bind_address(), "localhost:8000");
        assert_eq!(ServerConfig::default().bind_address(), "127.0.0.1:5000");
    }
}
