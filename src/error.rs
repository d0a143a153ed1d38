//! Error types for daytrack

use crate::domain::EntryCount;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daytrack application
#[derive(Debug, Error)]
pub enum DaytrackError {
    #[error("Not a daytrack directory: {0}")]
    NotStoreDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid name: '{0}'")]
    InvalidName(String),

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Invalid value assignment: '{0}'")]
    InvalidAssignment(String),

    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    #[error("Variable already exists: {0}")]
    VariableExists(String),

    #[error("Variable is inactive: {0}")]
    InactiveVariable(String),

    #[error("Variable {variable} has {entries} entries")]
    VariableHasEntries {
        variable: String,
        entries: EntryCount,
    },

    #[error("Invalid value for {variable}: {message}")]
    InvalidValue { variable: String, message: String },

    #[error("An entry for {0} already exists")]
    DateAlreadyRecorded(String),

    #[error("No active variables")]
    NoActiveVariables,

    #[error("Corrupt data in {path}: {message}")]
    CorruptData { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaytrackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaytrackError::NotStoreDirectory(_) => 2,
            DaytrackError::InvalidDate(_) => 3,
            DaytrackError::VariableNotFound(_) => 4,
            DaytrackError::VariableExists(_) | DaytrackError::DateAlreadyRecorded(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaytrackError::NotStoreDirectory(path) => {
                format!(
                    "Not a daytrack directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'daytrack init' in this directory to create a new store\n\
                    • Navigate to an existing daytrack directory\n\
                    • Set DAYTRACK_ROOT environment variable to your store path",
                    path.display()
                )
            }
            DaytrackError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: DD.MM.YYYY (e.g., 17.01.2025)\n\n\
                    Examples:\n\
                    daytrack add --date yesterday weight=70.5\n\
                    daytrack check --date 17.01.2025",
                    input
                )
            }
            DaytrackError::VariableNotFound(name) => {
                format!(
                    "Variable not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'daytrack var list' to see defined variables\n\
                    • Names are lowercase; spaces become '_' and other symbols are dropped\n\
                    • Create it with 'daytrack var add {}'",
                    name, name
                )
            }
            DaytrackError::InvalidAssignment(input) => {
                format!(
                    "Invalid value assignment: '{}'\n\n\
                    Values are given as NAME=VALUE, for example:\n\
                    daytrack add weight=70.5 mood=good",
                    input
                )
            }
            DaytrackError::InactiveVariable(name) => {
                format!(
                    "Variable is inactive: {}\n\n\
                    Activate it first: daytrack var move {}",
                    name, name
                )
            }
            DaytrackError::VariableHasEntries { variable, entries } => {
                format!(
                    "Variable {} has {} entries\n\n\
                    Deleting it discards all of them. To continue:\n\
                    daytrack var delete {} --force",
                    variable, entries, variable
                )
            }
            DaytrackError::NoActiveVariables => "No active variables\n\n\
                Suggestions:\n\
                • Add one: daytrack var add weight\n\
                • Activate an existing one: daytrack var move <name>"
                .to_string(),
            DaytrackError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: daytrack config export_append true",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaytrackError
pub type Result<T> = std::result::Result<T, DaytrackError>;
