//! Day log and entry recording

use crate::domain::{format_date, parse_date, DayRecord, EntryId, VariableName};
use crate::error::{DaytrackError, Result};
use crate::infrastructure::{tables, Store};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of reading the day log up to its first malformed line
struct DayScan {
    days: Vec<DayRecord>,
    /// Why the scan ended early, if it did
    stopped_at: Option<String>,
}

impl Store {
    /// Every valid day log record, in log order.
    ///
    /// A malformed line ends the log: by default the scan stops there with a
    /// warning, in strict mode it is reported as corrupt data.
    pub fn days(&self) -> Result<Vec<DayRecord>> {
        Ok(self.scan_days()?.days)
    }

    fn scan_days(&self) -> Result<DayScan> {
        let path = self.day_log_path();
        let mut days = Vec::new();

        for (index, record) in tables::open_reader(&path)?.records().enumerate() {
            // header
            if index == 0 {
                continue;
            }

            let parsed = match record {
                Ok(record) => match (record.get(0), record.get(1).and_then(parse_date)) {
                    (Some(id), Some(date)) if !id.trim().is_empty() => {
                        Ok(DayRecord::new(id.trim(), date))
                    }
                    _ => Err(format!(
                        "line {}: expected 'ID,dd.mm.yyyy', found '{}'",
                        index + 1,
                        record.iter().collect::<Vec<_>>().join(",")
                    )),
                },
                Err(e) => Err(format!("line {}: {}", index + 1, e)),
            };

            match parsed {
                Ok(day) => days.push(day),
                Err(message) if self.strict_day_log() => {
                    return Err(DaytrackError::CorruptData { path, message });
                }
                Err(message) => {
                    warn!(path = %path.display(), %message, "stopped reading day log at malformed line");
                    return Ok(DayScan {
                        days,
                        stopped_at: Some(message),
                    });
                }
            }
        }

        Ok(DayScan {
            days,
            stopped_at: None,
        })
    }

    /// Whether the day log already has an entry for `date`
    pub fn is_date_recorded(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.days()?.iter().any(|day| day.date == date))
    }

    /// Record an entry: one day log line plus one row per value.
    ///
    /// Either every file receives its line or none does: on failure all
    /// touched files are cut back to their previous length. Values must
    /// already be validated. A day log that stops at a malformed line is
    /// refused, since rows below it could never be read back.
    pub fn record_entry(
        &self,
        entry_id: &EntryId,
        date: NaiveDate,
        values: &[(VariableName, String)],
    ) -> Result<()> {
        self.record_entry_with(entry_id, date, values, tables::append_row)
    }

    fn record_entry_with<F>(
        &self,
        entry_id: &EntryId,
        date: NaiveDate,
        values: &[(VariableName, String)],
        mut append: F,
    ) -> Result<()>
    where
        F: FnMut(&Path, &[&str]) -> Result<()>,
    {
        let day_log = self.day_log_path();
        if let Some(message) = self.scan_days()?.stopped_at {
            return Err(DaytrackError::CorruptData {
                path: day_log,
                message,
            });
        }

        let mut targets: Vec<PathBuf> = vec![day_log];
        for (name, _) in values {
            let location = self
                .find_variable(name)?
                .ok_or_else(|| DaytrackError::VariableNotFound(name.to_string()))?;
            targets.push(self.variable_path(name, location));
        }

        let lengths = targets
            .iter()
            .map(|path| tables::file_len(path))
            .collect::<Result<Vec<u64>>>()?;

        let id = entry_id.to_string();
        let day = format_date(date);
        let written = append(&targets[0], &[id.as_str(), day.as_str()]).and_then(|_| {
            debug!(entry = %id, date = %day, "appended day");
            values
                .iter()
                .zip(&targets[1..])
                .try_for_each(|((_, value), path)| append(path, &[id.as_str(), value.as_str()]))
        });

        if let Err(e) = written {
            warn!(entry = %id, error = %e, "recording failed, rolling back");
            for (path, len) in targets.iter().zip(&lengths) {
                if let Err(rollback) = tables::truncate_to(path, *len) {
                    warn!(path = %path.display(), error = %rollback, "rollback failed");
                }
            }
            return Err(e);
        }

        info!(entry = %id, date = %day, values = values.len(), "recorded entry");
        Ok(())
    }
}
