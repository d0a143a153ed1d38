//! Variable management use cases

use crate::domain::{normalize_categories, EntryCount, Location, VariableKind, VariableName};
use crate::error::{DaytrackError, Result};
use crate::infrastructure::Store;

/// Everything known about one variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInfo {
    pub name: VariableName,
    pub location: Location,
    pub kind: VariableKind,
    pub entries: EntryCount,
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The variable still has values and deletion was not forced
    HasEntries(EntryCount),
}

/// Service for the variable directory
pub struct VariableService {
    store: Store,
}

impl VariableService {
    pub fn new(store: Store) -> Self {
        VariableService { store }
    }

    /// Add a variable; no categories means numeric
    pub fn add(&self, name: &str, categories: &[String]) -> Result<VariableName> {
        let name = VariableName::parse(name)?;
        let categories = normalize_categories(categories)?;
        self.store.add_variable(&name, &categories)?;
        Ok(name)
    }

    pub fn list(&self, location: Location) -> Result<Vec<VariableName>> {
        self.store.list_variables(location)
    }

    pub fn show(&self, name: &str) -> Result<VariableInfo> {
        let name = VariableName::parse(name)?;
        let location = self
            .store
            .find_variable(&name)?
            .ok_or_else(|| DaytrackError::VariableNotFound(name.to_string()))?;
        let kind = VariableKind::from_categories(self.store.categories(&name)?);
        let entries = self.store.entry_count(&name)?;

        Ok(VariableInfo {
            name,
            location,
            kind,
            entries,
        })
    }

    /// Toggle active/inactive, returning the new location
    pub fn toggle(&self, name: &str) -> Result<(VariableName, Location)> {
        let name = VariableName::parse(name)?;
        let location = self.store.move_variable(&name)?;
        Ok((name, location))
    }

    pub fn rename(&self, old: &str, new: &str) -> Result<(VariableName, VariableName)> {
        let old = VariableName::parse(old)?;
        let new = VariableName::parse(new)?;
        self.store.rename_variable(&old, &new)?;
        Ok((old, new))
    }

    /// Delete a variable. Without `force`, a variable with recorded values
    /// is kept and its entry count returned instead.
    pub fn delete(&self, name: &str, force: bool) -> Result<DeleteOutcome> {
        let name = VariableName::parse(name)?;
        let entries = self.store.entry_count(&name)?;

        if !force && !entries.is_empty() {
            return Ok(DeleteOutcome::HasEntries(entries));
        }

        self.store.delete_variable(&name)?;
        Ok(DeleteOutcome::Deleted)
    }
}
