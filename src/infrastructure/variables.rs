//! Variable directory: one CSV table per variable, split by location

use crate::domain::{EntryCount, Location, VariableName};
use crate::error::{DaytrackError, Result};
use crate::infrastructure::{tables, Store};
use std::collections::HashMap;
use std::fs;
use tracing::{debug, info};

impl Store {
    /// Create a new active variable.
    /// `categories` must already be normalized; empty means numeric.
    pub fn add_variable(&self, name: &VariableName, categories: &[String]) -> Result<()> {
        if self.find_variable(name)?.is_some() {
            return Err(DaytrackError::VariableExists(name.to_string()));
        }

        let mut header = vec!["ID"];
        header.extend(categories.iter().map(String::as_str));
        tables::create_table(&self.variable_path(name, Location::Active), &header)?;

        let mut order = self.load_order()?;
        if !order.order.contains(name) {
            order.order.push(name.clone());
            self.save_order(&order)?;
        }

        info!(variable = %name, categories = categories.len(), "added variable");
        Ok(())
    }

    /// Variables in one location, in creation order.
    /// Tables without an order entry follow, sorted by name.
    pub fn list_variables(&self, location: Location) -> Result<Vec<VariableName>> {
        let dir = self.location_dir(location);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            // Only names that survive normalization unchanged are variables
            match VariableName::parse(stem) {
                Ok(name) if name.as_str() == stem => names.push(name),
                _ => continue,
            }
        }

        let order = self.load_order()?;
        let positions: HashMap<&VariableName, usize> = order
            .order
            .iter()
            .enumerate()
            .map(|(i, name)| (name, i))
            .collect();

        names.sort_by(|a, b| match (positions.get(a), positions.get(b)) {
            (Some(pa), Some(pb)) => pa.cmp(pb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.cmp(b),
        });

        Ok(names)
    }

    /// Where a variable lives, searching active then inactive
    pub fn find_variable(&self, name: &VariableName) -> Result<Option<Location>> {
        for location in [Location::Active, Location::Inactive] {
            if self.variable_path(name, location).is_file() {
                return Ok(Some(location));
            }
        }
        Ok(None)
    }

    fn require_variable(&self, name: &VariableName) -> Result<Location> {
        self.find_variable(name)?
            .ok_or_else(|| DaytrackError::VariableNotFound(name.to_string()))
    }

    /// Toggle a variable between active and inactive, returning its new location
    pub fn move_variable(&self, name: &VariableName) -> Result<Location> {
        let from = self.require_variable(name)?;
        let to = from.toggled();

        fs::create_dir_all(self.location_dir(to))?;
        fs::rename(self.variable_path(name, from), self.variable_path(name, to))?;

        info!(variable = %name, %from, %to, "moved variable");
        Ok(to)
    }

    /// Rename a variable in place. The new name must not be in use anywhere.
    pub fn rename_variable(&self, old: &VariableName, new: &VariableName) -> Result<()> {
        let location = self.require_variable(old)?;
        if self.find_variable(new)?.is_some() {
            return Err(DaytrackError::VariableExists(new.to_string()));
        }

        fs::rename(
            self.variable_path(old, location),
            self.variable_path(new, location),
        )?;

        let mut order = self.load_order()?;
        match order.order.iter().position(|n| n == old) {
            Some(index) => order.order[index] = new.clone(),
            None => order.order.push(new.clone()),
        }
        self.save_order(&order)?;

        info!(from = %old, to = %new, "renamed variable");
        Ok(())
    }

    /// Remove a variable and every value recorded for it.
    /// The day log is left untouched.
    pub fn delete_variable(&self, name: &VariableName) -> Result<()> {
        let location = self.require_variable(name)?;
        fs::remove_file(self.variable_path(name, location))?;

        let mut order = self.load_order()?;
        let before = order.order.len();
        order.order.retain(|n| n != name);
        if order.order.len() != before {
            self.save_order(&order)?;
        }

        info!(variable = %name, "deleted variable");
        Ok(())
    }

    /// Category labels from the table header; empty for numeric variables
    pub fn categories(&self, name: &VariableName) -> Result<Vec<String>> {
        let location = self.require_variable(name)?;
        tables::read_header_labels(&self.variable_path(name, location))
    }

    /// Number of recorded values, capped for large tables
    pub fn entry_count(&self, name: &VariableName) -> Result<EntryCount> {
        let location = self.require_variable(name)?;
        tables::count_rows(&self.variable_path(name, location))
    }

    /// All values of a variable keyed by entry id.
    /// When an id repeats, the first row wins.
    pub fn read_values(&self, name: &VariableName) -> Result<HashMap<String, String>> {
        let location = self.require_variable(name)?;
        let path = self.variable_path(name, location);
        let mut values = HashMap::new();

        for (index, record) in tables::open_reader(&path)?.records().enumerate() {
            let record = record?;
            if index == 0 {
                continue;
            }
            let (Some(id), Some(value)) = (record.get(0), record.get(1)) else {
                continue;
            };
            values
                .entry(id.trim().to_string())
                .or_insert_with(|| value.trim().to_string());
        }

        debug!(variable = %name, rows = values.len(), "loaded variable values");
        Ok(values)
    }
}
