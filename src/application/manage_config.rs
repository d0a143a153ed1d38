//! Config management use case

use crate::error::{DaytrackError, Result};
use crate::infrastructure::{Config, Store, StoreRepository};

const KEYS: &str = "export_append, strict_day_log";

/// Service for managing store configuration
pub struct ConfigService {
    store: Store,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: Store) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "export_append" => Ok(config.export_append.to_string()),
            "strict_day_log" => Ok(config.strict_day_log.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DaytrackError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, created",
                key, KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "export_append" => config.export_append = parse_bool(key, value)?,
            "strict_day_log" => config.strict_day_log = parse_bool(key, value)?,
            "created" => {
                return Err(DaytrackError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DaytrackError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, KEYS
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(DaytrackError::Config(format!(
            "Invalid value for {}: '{}'. Expected true or false",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let store = crate::application::init::init(temp.path()).unwrap();
        ConfigService::new(store)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("export_append").unwrap(), "false");
        assert_eq!(service.get("strict_day_log").unwrap(), "false");
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("export_append", "yes").unwrap();
        service.set("strict_day_log", "TRUE").unwrap();

        assert_eq!(service.get("export_append").unwrap(), "true");
        assert!(service.list().unwrap().strict_day_log);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("export_append", "maybe").is_err());
        assert!(service.set("created", "2024-01-01").is_err());

        match service.set("colour", "blue").unwrap_err() {
            DaytrackError::Config(msg) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected Config error, got {}", other),
        }
        assert!(service.get("colour").is_err());
    }
}
