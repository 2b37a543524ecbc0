//! Shell configuration, read from an optional TOML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::network::NetworkConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for the `vfs-shell` binary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// JSON store location; `None` keeps everything in memory.
    pub store_path: Option<PathBuf>,
    pub prompt: Option<String>,
    pub network: NetworkConfig,
}

impl ShellConfig {
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::from_toml("", Path::new("empty.toml")).unwrap();
        assert!(config.store_path.is_none());
        assert!(config.prompt.is_none());
        assert!(config.network.allowed_url_prefixes.is_empty());
    }

    #[test]
    fn test_full_config() {
        let text = r#"
store_path = "/tmp/vfs.json"
prompt = "$ "

[network]
allowed_url_prefixes = ["https://raw.githubusercontent.com"]
max_redirects = 5
"#;
        let config = ShellConfig::from_toml(text, Path::new("vfs.toml")).unwrap();
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/vfs.json")));
        assert_eq!(config.prompt.as_deref(), Some("$ "));
        assert_eq!(config.network.max_redirects, Some(5));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ShellConfig::from_toml("colour = true", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file bad.toml"));
    }

    #[test]
    fn test_missing_file() {
        let err = ShellConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
