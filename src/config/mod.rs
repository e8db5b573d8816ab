use std::env;
use std::fmt;
use std::time::Duration;

use lazy_static::lazy_static;
use log::warn;

use crate::constants::DEFAULT_PAGE_SIZE;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
const DEFAULT_MONGO_DB: &str = "news_app";
const DEFAULT_MONGO_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    /// Deadline, in seconds, for connecting and for every listing query.
    pub mongo_timeout_secs: u64,
    pub posts_per_page: u64,
}

/// A configuration value was present but could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => write!(
                f,
                "unable to decode config into struct: {} must be a non-negative integer, got {:?}",
                key, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGO_URI.to_string(),
            database_name: DEFAULT_MONGO_DB.to_string(),
            mongo_timeout_secs: DEFAULT_MONGO_TIMEOUT_SECS,
            posts_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from the process environment, falling back to the
    /// defaults when a numeric value cannot be decoded.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|err| {
            warn!("{}; using default configuration", err);
            Self::default()
        })
    }

    pub fn try_from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            mongodb_uri: lookup("MONGO_URI").unwrap_or(defaults.mongodb_uri),
            database_name: lookup("MONGO_DB").unwrap_or(defaults.database_name),
            mongo_timeout_secs: parse_number(&lookup, "MONGO_TIMEOUT")?
                .unwrap_or(defaults.mongo_timeout_secs),
            posts_per_page: parse_number(&lookup, "APP_POSTS_PER_PAGE")?
                .unwrap_or(defaults.posts_per_page),
        })
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.mongo_timeout_secs)
    }
}

fn parse_number<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "news_app");
        assert_eq!(config.mongo_timeout_secs, 10);
        assert_eq!(config.posts_per_page, 12);
        assert_eq!(config.query_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("MONGO_URI", "mongodb://testhost:27017"),
            ("MONGO_DB", "test_db"),
            ("MONGO_TIMEOUT", "5"),
            ("APP_POSTS_PER_PAGE", "20"),
        ]))
        .unwrap();

        assert_eq!(config.mongodb_uri, "mongodb://testhost:27017");
        assert_eq!(config.database_name, "test_db");
        assert_eq!(config.mongo_timeout_secs, 5);
        assert_eq!(config.posts_per_page, 20);
    }

    #[test]
    fn test_unparsable_number_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("MONGO_TIMEOUT", "string")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: "MONGO_TIMEOUT",
                value: "string".to_string()
            }
        );
        assert!(err.to_string().contains("unable to decode config into struct"));
    }
}
