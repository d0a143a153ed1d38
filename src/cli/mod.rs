//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, VarCommand};
pub use output::{format_day_list, format_variable_info, format_variable_list};
