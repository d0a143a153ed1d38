//! Record entry use case

use crate::domain::{format_date, EntryId, Location, VariableKind, VariableName};
use crate::error::{DaytrackError, Result};
use crate::infrastructure::Store;
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Date the next entry is recorded for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub current_date: NaiveDate,
}

impl Session {
    pub fn new(current_date: NaiveDate) -> Self {
        Session { current_date }
    }

    /// Move on to the following day
    pub fn advance(&mut self) {
        self.current_date += Duration::days(1);
    }
}

/// Split a `name=value` argument
pub fn parse_assignment(input: &str) -> Result<(String, String)> {
    match input.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() && !value.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(DaytrackError::InvalidAssignment(input.to_string())),
    }
}

/// Service for recording one entry per day
pub struct RecordEntryService {
    store: Store,
}

impl RecordEntryService {
    pub fn new(store: Store) -> Self {
        RecordEntryService { store }
    }

    /// Validate and record values for the session's date, then advance the
    /// session to the next day.
    ///
    /// Active variables without a value are left out and export as `NA`.
    pub fn record(&self, session: &mut Session, values: &[(String, String)]) -> Result<EntryId> {
        let date = session.current_date;

        if self.store.list_variables(Location::Active)?.is_empty() {
            return Err(DaytrackError::NoActiveVariables);
        }
        if self.store.is_date_recorded(date)? {
            return Err(DaytrackError::DateAlreadyRecorded(format_date(date)));
        }

        let mut validated: Vec<(VariableName, String)> = Vec::with_capacity(values.len());
        for (raw_name, raw_value) in values {
            let name = VariableName::parse(raw_name)?;
            if validated.iter().any(|(n, _)| *n == name) {
                return Err(DaytrackError::InvalidValue {
                    variable: name.to_string(),
                    message: "given more than once".to_string(),
                });
            }

            match self.store.find_variable(&name)? {
                Some(Location::Active) => {}
                Some(Location::Inactive) => {
                    return Err(DaytrackError::InactiveVariable(name.to_string()))
                }
                None => return Err(DaytrackError::VariableNotFound(name.to_string())),
            }

            let kind = VariableKind::from_categories(self.store.categories(&name)?);
            let value = kind.validate(&name, raw_value)?;
            debug!(variable = %name, %value, "validated value");
            validated.push((name, value));
        }

        let entry_id = EntryId::new();
        self.store.record_entry(&entry_id, date, &validated)?;
        session.advance();

        Ok(entry_id)
    }
}
