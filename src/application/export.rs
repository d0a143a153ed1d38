//! Export use case: join the active variable tables through the day log

use crate::domain::{format_date, normalize_name, Location};
use crate::error::{DaytrackError, Result};
use crate::infrastructure::{tables, Store};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

/// Value written for a day without a row in a variable's table
pub const MISSING_VALUE: &str = "NA";

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub rows: usize,
    pub appended: bool,
}

/// Service for writing wide-format CSV exports
pub struct ExportService {
    store: Store,
}

impl ExportService {
    pub fn new(store: Store) -> Self {
        ExportService { store }
    }

    /// Build the export table: header `date,<active variables>` followed by
    /// one row per day log record, in log order.
    pub fn build_rows(&self) -> Result<Vec<Vec<String>>> {
        let variables = self.store.list_variables(Location::Active)?;

        let mut lookups: Vec<HashMap<String, String>> = Vec::with_capacity(variables.len());
        for name in &variables {
            lookups.push(self.store.read_values(name)?);
        }

        let mut header = vec!["date".to_string()];
        header.extend(variables.iter().map(|n| n.to_string()));

        let mut rows = vec![header];
        for day in self.store.days()? {
            let mut row = Vec::with_capacity(variables.len() + 1);
            row.push(format_date(day.date));
            row.extend(lookups.iter().map(|values| {
                values
                    .get(&day.entry_id)
                    .cloned()
                    .unwrap_or_else(|| MISSING_VALUE.to_string())
            }));
            rows.push(row);
        }

        Ok(rows)
    }

    /// Write `export/<name>.csv`, replacing it unless `append` is set.
    /// Appending writes a fresh header before the rows.
    pub fn export(&self, name: &str, append: bool) -> Result<ExportReport> {
        let file_stem = normalize_name(name);
        if file_stem.is_empty() {
            return Err(DaytrackError::InvalidName(name.to_string()));
        }

        let rows = self.build_rows()?;
        let path = self.store.export_dir().join(format!("{}.csv", file_stem));
        tables::write_table(&path, &rows, append)?;

        let report = ExportReport {
            path,
            columns: rows[0].clone(),
            rows: rows.len() - 1,
            appended: append,
        };
        info!(path = %report.path.display(), rows = report.rows, append, "exported data");
        Ok(report)
    }
}
