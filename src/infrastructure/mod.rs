//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod day_log;
pub mod repository;
pub mod tables;
pub mod variables;

pub use config::Config;
pub use repository::{Store, StoreRepository, ROOT_ENV};
