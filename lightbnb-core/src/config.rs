use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Environment variable holding a full connection URL
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable overriding the fixtures directory
pub const FIXTURES_DIR_VAR: &str = "LIGHTBNB_FIXTURES_DIR";

/// Configuration for the LightBnB gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightbnbConfig {
    pub database: DatabaseConfig,
    pub fixtures: FixturesConfig,
}

/// Store connectivity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over the individual fields
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "vagrant".to_string(),
            password: "123".to_string(),
            name: "lightbnb".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// Directory holding `properties.json` and `users.json`
    pub dir: PathBuf,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("fixtures"),
        }
    }
}

impl LightbnbConfig {
    /// Load config and apply environment overrides.
    ///
    /// An explicit `path` must exist. Without one, `~/.lightbnb/config.toml`
    /// is read when present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::toml(path, e))
    }

    /// Get config file path: ~/.lightbnb/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lightbnb/config.toml")
    }

    /// Apply overrides from a variable lookup (the process environment in `load`).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_VAR).filter(|v| !v.is_empty()) {
            self.database.url = Some(url);
        }
        if let Some(dir) = lookup(FIXTURES_DIR_VAR).filter(|v| !v.is_empty()) {
            self.fixtures.dir = PathBuf::from(dir);
        }
    }

    fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(CoreError::config("database.max_connections must be at least 1"));
        }
        if self.database.url.is_none() && self.database.name.is_empty() {
            return Err(CoreError::config("database.name is required when database.url is unset"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_match_local_store() {
        let config = LightbnbConfig::default();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.user, "vagrant");
        assert_eq!(config.database.name, "lightbnb");
        assert_eq!(config.fixtures.dir, PathBuf::from("fixtures"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nhost = \"db.internal\"\nmax_connections = 12").unwrap();

        let config = LightbnbConfig::from_file(file.path()).unwrap();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.max_connections, 12);
        assert_eq!(config.database.user, "vagrant");
    }

    #[test]
    fn invalid_toml_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database\nhost = ").unwrap();

        let err = LightbnbConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Toml { .. }));
    }

    #[test]
    fn missing_explicit_file_fails() {
        let err = LightbnbConfig::load(Some(Path::new("/nonexistent/lightbnb.toml"))).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[test]
    fn overrides_replace_values() {
        let vars: HashMap<&str, &str> = [
            (DATABASE_URL_VAR, "postgres://app@db/lightbnb_test"),
            (FIXTURES_DIR_VAR, "/srv/fixtures"),
        ]
        .into_iter()
        .collect();

        let mut config = LightbnbConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://app@db/lightbnb_test")
        );
        assert_eq!(config.fixtures.dir, PathBuf::from("/srv/fixtures"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let mut config = LightbnbConfig::default();
        config.apply_overrides(|_| Some(String::new()));
        assert!(config.database.url.is_none());
    }

    #[test]
    fn zero_pool_size_rejected() {
        let mut config = LightbnbConfig::default();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());
    }
}
