//! File system store
//!
//! Layout under the store root:
//!
//! ```text
//! .daytrack/config.toml
//! .daytrack/variables.toml      creation order of variables
//! days.csv                      day log, `ID,date`
//! variables/active/<name>.csv
//! variables/inactive/<name>.csv
//! export/<name>.csv
//! ```

use crate::domain::{Location, VariableName};
use crate::error::{DaytrackError, Result};
use crate::infrastructure::config::META_DIR;
use crate::infrastructure::{tables, Config};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable pointing at a store root
pub const ROOT_ENV: &str = "DAYTRACK_ROOT";

pub(crate) const DAY_LOG_FILE: &str = "days.csv";
pub(crate) const DAY_LOG_HEADER: [&str; 2] = ["ID", "date"];
const VARIABLES_DIR: &str = "variables";
const EXPORT_DIR: &str = "export";
const ORDER_FILE: &str = "variables.toml";

/// Abstract repository for store setup
pub trait StoreRepository {
    /// Get the root directory of this store
    fn root(&self) -> &Path;

    /// Load configuration from .daytrack/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .daytrack/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .daytrack directory exists
    fn is_initialized(&self) -> bool;

    /// Create the directory layout and an empty day log
    fn initialize(&self) -> Result<()>;
}

/// Creation order of variables, persisted so listings and export columns are stable
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct VariableOrder {
    #[serde(default)]
    pub order: Vec<VariableName>,
}

/// Flat-file store owning the variable tables, the day log and exports
#[derive(Debug, Clone)]
pub struct Store {
    pub root: PathBuf,
    strict_day_log: bool,
}

impl Store {
    /// Create a new store handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Store {
            root,
            strict_day_log: false,
        }
    }

    /// Treat malformed day log lines as errors instead of the end of the log
    pub fn with_strict_day_log(mut self, strict: bool) -> Self {
        self.strict_day_log = strict;
        self
    }

    pub fn strict_day_log(&self) -> bool {
        self.strict_day_log
    }

    /// Find the store root.
    /// First checks DAYTRACK_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(Store::new(path));
            } else {
                return Err(DaytrackError::Config(format!(
                    "{} is set to '{}' but no .daytrack directory found. \
                    Run 'daytrack init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Find the store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_meta_dir(dir))
            .map(|dir| Store::new(dir.to_path_buf()))
            .ok_or_else(|| DaytrackError::NotStoreDirectory(start.to_path_buf()))
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    pub fn day_log_path(&self) -> PathBuf {
        self.root.join(DAY_LOG_FILE)
    }

    pub fn location_dir(&self, location: Location) -> PathBuf {
        self.root.join(VARIABLES_DIR).join(location.dir_name())
    }

    pub fn variable_path(&self, name: &VariableName, location: Location) -> PathBuf {
        self.location_dir(location).join(name.file_name())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.root.join(EXPORT_DIR)
    }

    fn order_path(&self) -> PathBuf {
        self.root.join(META_DIR).join(ORDER_FILE)
    }

    pub(crate) fn load_order(&self) -> Result<VariableOrder> {
        let path = self.order_path();
        if !path.exists() {
            return Ok(VariableOrder::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub(crate) fn save_order(&self, order: &VariableOrder) -> Result<()> {
        let contents = toml::to_string_pretty(order)?;
        fs::write(self.order_path(), contents)?;
        debug!(count = order.order.len(), "saved variable order");
        Ok(())
    }
}

impl StoreRepository for Store {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let meta_dir = self.root.join(META_DIR);

        if meta_dir.exists() {
            return Err(DaytrackError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&meta_dir)?;
        fs::create_dir_all(self.location_dir(Location::Active))?;
        fs::create_dir_all(self.location_dir(Location::Inactive))?;
        fs::create_dir_all(self.export_dir())?;

        // Keep a day log left behind by an earlier setup
        let day_log = self.day_log_path();
        if !day_log.exists() {
            tables::create_table(&day_log, &DAY_LOG_HEADER)?;
        }

        debug!(root = %self.root.display(), "initialized store layout");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_initialize_creates_layout() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().to_path_buf());

        assert!(!store.is_initialized());
        store.initialize().unwrap();
        assert!(store.is_initialized());

        assert!(temp.path().join(".daytrack").is_dir());
        assert!(temp.path().join("variables/active").is_dir());
        assert!(temp.path().join("variables/inactive").is_dir());
        assert!(temp.path().join("export").is_dir());
        assert_eq!(
            fs::read_to_string(temp.path().join("days.csv")).unwrap(),
            "ID,date\n"
        );
    }

    #[test]
    fn test_initialize_keeps_existing_day_log() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("days.csv"), "ID,date\nabc,01.01.2024\n").unwrap();

        Store::new(temp.path().to_path_buf()).initialize().unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("days.csv")).unwrap(),
            "ID,date\nabc,01.01.2024\n"
        );
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().to_path_buf());

        store.initialize().unwrap();
        assert!(store.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".daytrack")).unwrap();
        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let store = Store::discover_from(&subdir).unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_store() {
        let temp = TempDir::new().unwrap();

        match Store::discover_from(temp.path()).unwrap_err() {
            DaytrackError::NotStoreDirectory(_) => {}
            other => panic!("Expected NotStoreDirectory error, got {}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let mut config = Config::new();
        config.strict_day_log = true;
        store.save_config(&config).unwrap();

        assert!(store.load_config().unwrap().strict_day_log);
    }

    #[test]
    fn test_order_defaults_to_empty() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        assert!(store.load_order().unwrap().order.is_empty());

        let order = VariableOrder {
            order: vec![VariableName::parse("weight").unwrap()],
        };
        store.save_order(&order).unwrap();
        assert_eq!(store.load_order().unwrap().order, order.order);
    }

    #[test]
    fn test_discover_with_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".daytrack")).unwrap();
        std::env::set_var(ROOT_ENV, temp.path());

        let store = Store::discover().unwrap();
        assert_eq!(store.root, temp.path());
    }

    #[test]
    fn test_discover_root_env_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);

        let temp = TempDir::new().unwrap();
        std::env::set_var(ROOT_ENV, temp.path());

        match Store::discover().unwrap_err() {
            DaytrackError::Config(msg) => assert!(msg.contains("no .daytrack directory")),
            other => panic!("Expected Config error, got {}", other),
        }
    }
}
