//! Domain layer - Business logic and domain models

pub mod entry;
pub mod time_ref;
pub mod variable;

pub use entry::{format_date, parse_date, DayRecord, EntryId, DATE_FORMAT};
pub use time_ref::TimeReference;
pub use variable::{
    normalize_categories, normalize_name, EntryCount, Location, VariableKind, VariableName,
    ENTRY_COUNT_CAP,
};
