//! Entries and day log records

use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

/// On-disk date format of the day log and exports
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Format a date as `dd.mm.yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `dd.mm.yyyy` date
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Random identifier shared by a day log row and its variable values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the day log.
///
/// The id is kept as text: the join matches identifiers verbatim and does not
/// require them to be well-formed UUIDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub entry_id: String,
    pub date: NaiveDate,
}

impl DayRecord {
    pub fn new(entry_id: impl Into<String>, date: NaiveDate) -> Self {
        DayRecord {
            entry_id: entry_id.into(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_date(date), "02.01.2024");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("01.01.2024"),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(parse_date(" 31.12.2023 "), NaiveDate::from_ymd_opt(2023, 12, 31));
        assert!(parse_date("2024-01-01").is_none());
        assert!(parse_date("32.01.2024").is_none());
        assert!(parse_date("date").is_none());
    }

    #[test]
    fn test_entry_ids_are_unique_uuids() {
        let a = EntryId::new();
        let b = EntryId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 36);
        assert_eq!(a.as_uuid().get_version_num(), 4);
    }
}
