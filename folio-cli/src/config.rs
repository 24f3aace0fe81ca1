//! Serve Configuration
//!
//! CLI flags override `folio.toml`, which overrides the built-in defaults.
//! The TOML file is looked up in the working directory first, then in the
//! user config directory (`~/.config/folio/folio.toml` on Linux).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Backend origin `/api` requests and probes go to when nothing else is
/// configured
pub const DEFAULT_UPSTREAM: &str = "https://folio-backend.onrender.com";

/// Default port for the web UI
pub const DEFAULT_PORT: u16 = 8080;

/// Optional `folio.toml` contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub upstream: Option<String>,
    pub open: Option<bool>,
}

/// Fully resolved serve settings
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub port: u16,
    pub upstream: String,
    pub open: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl FileConfig {
    /// Load the first `folio.toml` found, or defaults when there is none
    pub fn discover() -> Result<Self, ConfigError> {
        let mut candidates = vec![PathBuf::from("folio.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("folio").join("folio.toml"));
        }

        for path in candidates {
            if path.is_file() {
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }

    /// Parse one config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ServeConfig {
    /// Layer CLI flags over the file config over the defaults
    pub fn resolve(
        file: FileConfig,
        port: Option<u16>,
        upstream: Option<String>,
        no_browser: bool,
    ) -> Self {
        let upstream = upstream
            .or(file.upstream)
            .unwrap_or_else(|| DEFAULT_UPSTREAM.to_string());

        Self {
            port: port.or(file.port).unwrap_or(DEFAULT_PORT),
            upstream: upstream.trim_end_matches('/').to_string(),
            open: if no_browser {
                false
            } else {
                file.open.unwrap_or(true)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_configured() {
        let config = ServeConfig::resolve(FileConfig::default(), None, None, false);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.upstream, DEFAULT_UPSTREAM);
        assert!(config.open);
    }

    #[test]
    fn flags_override_file_config() {
        let file = FileConfig {
            port: Some(9000),
            upstream: Some("https://staging.example.com".to_string()),
            open: Some(true),
        };
        let config = ServeConfig::resolve(
            file,
            Some(3000),
            Some("https://prod.example.com/".to_string()),
            true,
        );
        assert_eq!(config.port, 3000);
        // Trailing slash is normalized away
        assert_eq!(config.upstream, "https://prod.example.com");
        assert!(!config.open);
    }

    #[test]
    fn file_config_fills_missing_flags() {
        let file = FileConfig {
            port: Some(9000),
            upstream: None,
            open: Some(false),
        };
        let config = ServeConfig::resolve(file, None, None, false);
        assert_eq!(config.port, 9000);
        assert_eq!(config.upstream, DEFAULT_UPSTREAM);
        assert!(!config.open);
    }

    #[test]
    fn loads_a_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(
            &path,
            "port = 4000\nupstream = \"http://127.0.0.1:5000\"\nopen = false\n",
        )
        .unwrap();

        let file = FileConfig::load(&path).unwrap();
        assert_eq!(file.port, Some(4000));
        assert_eq!(file.upstream.as_deref(), Some("http://127.0.0.1:5000"));
        assert_eq!(file.open, Some(false));
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "port = \"not a number").unwrap();

        assert!(matches!(
            FileConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
