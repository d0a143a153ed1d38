//! Application layer - Use cases and orchestration

pub mod export;
pub mod init;
pub mod list_days;
pub mod manage_config;
pub mod manage_variables;
pub mod record_entry;

pub use export::{ExportReport, ExportService};
pub use manage_config::ConfigService;
pub use manage_variables::{DeleteOutcome, VariableInfo, VariableService};
pub use record_entry::{parse_assignment, RecordEntryService, Session};
