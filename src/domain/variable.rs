//! Variable names, locations and value domains

use crate::error::{DaytrackError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Entry counts above this are reported as `EntryCount::MoreThanCap`.
pub const ENTRY_COUNT_CAP: usize = 100;

fn disallowed_chars() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9_]").unwrap())
}

/// Normalize free text into a store name: trimmed, lowercase, spaces become
/// underscores and everything outside `[a-z0-9_]` is dropped.
pub fn normalize_name(input: &str) -> String {
    let lowered = input.trim().to_lowercase().replace(' ', "_");
    disallowed_chars().replace_all(&lowered, "").into_owned()
}

/// A normalized, non-empty variable name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableName(String);

impl VariableName {
    /// Normalize user input into a variable name
    pub fn parse(input: &str) -> Result<Self> {
        let name = normalize_name(input);
        if name.is_empty() {
            return Err(DaytrackError::InvalidName(input.to_string()));
        }
        Ok(VariableName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this variable's table
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.0)
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which set a variable lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Offered for daily entries
    Active,
    /// Kept for history only
    Inactive,
}

impl Location {
    /// Directory name under `variables/`
    pub fn dir_name(&self) -> &'static str {
        match self {
            Location::Active => "active",
            Location::Inactive => "inactive",
        }
    }

    /// The opposite location
    pub fn toggled(&self) -> Location {
        match self {
            Location::Active => Location::Inactive,
            Location::Inactive => Location::Active,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Value domain of a variable, derived from its category list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableKind {
    Numeric,
    Categorical(Vec<String>),
}

impl VariableKind {
    /// An empty category list means numeric
    pub fn from_categories(categories: Vec<String>) -> Self {
        if categories.is_empty() {
            VariableKind::Numeric
        } else {
            VariableKind::Categorical(categories)
        }
    }

    /// Check a raw value against this domain and return the text to store.
    ///
    /// Numeric values are stored exactly as entered (trimmed) so that `71`
    /// is exported as `71`, not `71.0`.
    pub fn validate(&self, variable: &VariableName, raw: &str) -> Result<String> {
        let value = raw.trim();

        match self {
            VariableKind::Numeric => match value.parse::<f64>() {
                Ok(number) if number.is_finite() => Ok(value.to_string()),
                _ => Err(DaytrackError::InvalidValue {
                    variable: variable.to_string(),
                    message: format!("'{}' is not a number", raw),
                }),
            },
            VariableKind::Categorical(categories) => {
                if categories.iter().any(|c| c == value) {
                    Ok(value.to_string())
                } else {
                    Err(DaytrackError::InvalidValue {
                        variable: variable.to_string(),
                        message: format!(
                            "'{}' is not a category, expected one of: {}",
                            raw,
                            categories.join(", ")
                        ),
                    })
                }
            }
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Numeric => f.write_str("numeric"),
            VariableKind::Categorical(_) => f.write_str("categorical"),
        }
    }
}

/// Normalize category labels, rejecting empty and repeated labels
pub fn normalize_categories(labels: &[String]) -> Result<Vec<String>> {
    let mut categories: Vec<String> = Vec::with_capacity(labels.len());

    for label in labels {
        let category = normalize_name(label);
        if category.is_empty() {
            return Err(DaytrackError::InvalidName(label.clone()));
        }
        if categories.contains(&category) {
            return Err(DaytrackError::DuplicateCategory(category));
        }
        categories.push(category);
    }

    Ok(categories)
}

/// Number of recorded values in a variable table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryCount {
    Exact(usize),
    /// The count passed `ENTRY_COUNT_CAP`; counting stopped there
    MoreThanCap,
}

impl EntryCount {
    pub fn is_empty(&self) -> bool {
        matches!(self, EntryCount::Exact(0))
    }
}

impl fmt::Display for EntryCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryCount::Exact(n) => write!(f, "{}", n),
            EntryCount::MoreThanCap => write!(f, "more than {}", ENTRY_COUNT_CAP),
        }
    }
}
