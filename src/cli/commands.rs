//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daytrack")]
#[command(about = "Daily variable journal with CSV export", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Manage variables
    #[command(subcommand)]
    Var(VarCommand),

    /// Record an entry
    Add {
        /// Date of the entry (e.g., today, yesterday, last monday, 17.01.2025)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Values as NAME=VALUE
        #[arg(value_name = "NAME=VALUE", required = true)]
        values: Vec<String>,
    },

    /// Check whether a date already has an entry
    Check {
        /// Date to check
        #[arg(short, long, default_value = "today")]
        date: String,
    },

    /// List recorded days
    Days,

    /// Export active variables to export/<NAME>.csv
    Export {
        /// Name of the export file
        name: String,

        /// Append to an existing export instead of replacing it
        #[arg(short, long)]
        append: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum VarCommand {
    /// Add a variable (numeric unless categories are given)
    Add {
        name: String,

        /// Allowed category (repeat for each category)
        #[arg(short, long = "category", value_name = "LABEL")]
        categories: Vec<String>,
    },

    /// List variables
    List {
        /// Only active variables
        #[arg(long, conflicts_with = "inactive")]
        active: bool,

        /// Only inactive variables
        #[arg(long)]
        inactive: bool,
    },

    /// Show a variable's location, kind and entry count
    Show { name: String },

    /// Toggle a variable between active and inactive
    Move { name: String },

    /// Rename a variable
    Rename { old: String, new: String },

    /// Delete a variable and all its values
    Delete {
        name: String,

        /// Delete even if values were recorded
        #[arg(short, long)]
        force: bool,
    },
}
