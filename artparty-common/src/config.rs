//! Configuration loading and resolution
//!
//! Each setting resolves through a fixed priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (merged into the CLI layer by clap)
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default listen port for the API server
pub const DEFAULT_PORT: u16 = 8717;

/// Default SQLite database path, relative to the working directory
pub const DEFAULT_DATABASE: &str = "artparty.db";

/// Default config file probed when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "artparty.toml";

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file
    pub database: PathBuf,
    /// TCP port the HTTP server listens on
    pub port: u16,
}

/// Optional keys read from the TOML config file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    database: Option<PathBuf>,
    port: Option<u16>,
}

impl Config {
    /// Resolve configuration from CLI/env overrides and an optional config file.
    ///
    /// An explicitly named config file must exist and parse; the implicit
    /// default file is skipped silently when absent.
    pub fn resolve(
        database: Option<PathBuf>,
        port: Option<u16>,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let file = load_config_file(config_path)?;

        Ok(Self {
            database: database
                .or(file.database)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE)),
            port: port.or(file.port).unwrap_or(DEFAULT_PORT),
        })
    }
}

fn load_config_file(path: Option<&Path>) -> Result<ConfigFile> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !path.exists() {
        if required {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(ConfigFile::default());
    }

    let text = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    toml::from_str(&text)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let config = Config::resolve(None, None, None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database, PathBuf::from(DEFAULT_DATABASE));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database = \"/tmp/portfolio.db\"\nport = 9000").unwrap();

        let config = Config::resolve(None, None, Some(file.path())).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.database, PathBuf::from("/tmp/portfolio.db"));
    }

    #[test]
    fn cli_values_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9000").unwrap();

        let config = Config::resolve(
            Some(PathBuf::from("cli.db")),
            Some(9001),
            Some(file.path()),
        )
        .unwrap();
        assert_eq!(config.port, 9001);
        assert_eq!(config.database, PathBuf::from("cli.db"));
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let result = Config::resolve(None, None, Some(Path::new("/nonexistent/artparty.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let result = Config::resolve(None, None, Some(file.path()));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
