//! daytrack - Daily variable journal
//!
//! Tracks numeric and categorical variables, one entry per day, in plain CSV
//! files and exports them as a single wide table.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaytrackError;
