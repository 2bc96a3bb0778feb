//! Server configuration
//!
//! Defaults, overridden by `POSTBOARD_*` environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_address: String,
    pub database_url: String,
    pub max_connections: u32,
    pub seed_posts: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(config::Environment::with_prefix("POSTBOARD"))
    }

    pub fn load_from(env: config::Environment) -> Result<Self> {
        config::Config::builder()
            .set_default("bind_address", "0.0.0.0:8000")?
            .set_default("database_url", "sqlite://./test.db")?
            .set_default("max_connections", 5_i64)?
            .set_default("seed_posts", true)?
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(vars: &[(&str, &str)]) -> config::Environment {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        config::Environment::with_prefix("POSTBOARD").source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = Config::load_from(env_from(&[])).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.database_url, "sqlite://./test.db");
        assert_eq!(config.max_connections, 5);
        assert!(config.seed_posts);
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::load_from(env_from(&[
            ("POSTBOARD_BIND_ADDRESS", "127.0.0.1:9000"),
            ("POSTBOARD_MAX_CONNECTIONS", "2"),
            ("POSTBOARD_SEED_POSTS", "false"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.max_connections, 2);
        assert!(!config.seed_posts);
    }

    #[test]
    fn test_bad_value_rejected() {
        let result = Config::load_from(env_from(&[("POSTBOARD_MAX_CONNECTIONS", "many")]));
        assert!(result.is_err());
    }
}
