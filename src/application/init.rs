//! Initialize store use case

use crate::error::Result;
use crate::infrastructure::{Config, Store, StoreRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new store at the specified path.
pub fn init(path: &Path) -> Result<Store> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = Store::new(path.to_path_buf());
    store.initialize()?;
    store.save_config(&Config::new())?;

    info!(root = %path.display(), "initialized store");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_store_and_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("journal");

        let store = init(&root).unwrap();

        assert!(store.is_initialized());
        assert!(root.join(".daytrack/config.toml").exists());
        assert!(root.join("days.csv").exists());
        assert!(!store.load_config().unwrap().export_append);
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
