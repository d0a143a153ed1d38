//! List recorded days use case

use crate::domain::DayRecord;
use crate::error::Result;
use crate::infrastructure::Store;

/// Day log records in the order they were recorded.
pub fn list_days(store: &Store) -> Result<Vec<DayRecord>> {
    store.days()
}
