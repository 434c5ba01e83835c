use crate::AppError;
use crate::error::ConfigError;
use crate::storage::config::Config;
use crate::utils::validation::validate_url;
use std::path::PathBuf;

/// Configuration keys accepted by `config set`.
pub const CONFIG_KEYS: [&str; 5] = [
    "api.base_url",
    "api.timeout_seconds",
    "cache.enabled",
    "cache.capacity",
    "cache.ttl_seconds",
];

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set a dotted configuration key from its textual value
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        match key {
            "api.base_url" => {
                validate_url(value)?;
                self.config.api.base_url = value.trim_end_matches('/').to_string();
            }
            "api.timeout_seconds" => {
                self.config.api.timeout_seconds = parse_positive(key, value)?;
            }
            "cache.enabled" => {
                self.config.cache.enabled =
                    value
                        .parse::<bool>()
                        .map_err(|_| ConfigError::InvalidValue {
                            field: key.to_string(),
                            value: value.to_string(),
                            reason: "expected true or false".to_string(),
                        })?;
            }
            "cache.capacity" => {
                self.config.cache.capacity = parse_positive(key, value)? as usize;
            }
            "cache.ttl_seconds" => {
                self.config.cache.ttl_seconds = parse_positive(key, value)?;
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// `key = value` lines for display
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let api = &self.config.api;
        let cache = &self.config.cache;
        vec![
            ("api.base_url", api.base_url.clone()),
            ("api.timeout_seconds", api.timeout_seconds.to_string()),
            ("cache.enabled", cache.enabled.to_string()),
            ("cache.capacity", cache.capacity.to_string()),
            ("cache.ttl_seconds", cache.ttl_seconds.to_string()),
        ]
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
            reason: "expected a positive integer".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_field_updates_config() {
        let mut service = ConfigService::new(Config::default());

        service
            .set_field("api.base_url", "http://localhost:8080/v2/")
            .expect("valid url");
        service
            .set_field("api.timeout_seconds", "10")
            .expect("valid timeout");
        service
            .set_field("cache.enabled", "false")
            .expect("valid bool");
        service
            .set_field("cache.capacity", "16")
            .expect("valid capacity");

        let config = service.config();
        assert_eq!(config.api.base_url, "http://localhost:8080/v2");
        assert_eq!(config.api.timeout_seconds, 10);
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.capacity, 16);
    }

    #[test]
    fn test_set_field_rejects_unknown_key() {
        let mut service = ConfigService::new(Config::default());
        let result = service.set_field("profile.url", "http://example.com");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::UnknownKey { .. }))
        ));
    }

    #[test]
    fn test_set_field_rejects_invalid_values() {
        let mut service = ConfigService::new(Config::default());
        assert!(service.set_field("api.base_url", "ly.govapi.tw").is_err());
        assert!(service.set_field("api.timeout_seconds", "0").is_err());
        assert!(service.set_field("cache.ttl_seconds", "-5").is_err());
        assert!(service.set_field("cache.enabled", "yes").is_err());
        assert_eq!(service.config(), &Config::default());
    }

    #[test]
    fn test_entries_cover_every_key() {
        let service = ConfigService::new(Config::default());
        let keys: Vec<&str> = service.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, CONFIG_KEYS.to_vec());
    }

    #[test]
    fn test_save_config_round_trip() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");

        let mut service = ConfigService::new(Config::default());
        service
            .set_field("cache.ttl_seconds", "42")
            .expect("valid ttl");
        service.save_config(Some(path.clone())).expect("save");

        let loaded = Config::load(Some(path)).expect("load");
        assert_eq!(loaded.cache.ttl_seconds, 42);
    }
}
