use std::{env, path::PathBuf};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Server settings read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub catalog_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        let catalog_path = lookup("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        Ok(Self {
            database_url,
            port,
            catalog_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/plans")]))
            .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.catalog_path, PathBuf::from("data/catalog.json"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/plans"),
            ("PORT", "8080"),
            ("CATALOG_PATH", "/srv/catalog.json"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("DATABASE_URL", "x"), ("PORT", "http")])),
            Err(ConfigError::InvalidPort(_))
        ));
    }
}
