//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "journalx")]
#[command(about = "Personal journal kept in a local preference store", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new entry (opens the editor when no text is given)
    New {
        /// Entry text
        #[arg(value_name = "TEXT")]
        text: Vec<String>,

        /// Bookmark the entry
        #[arg(short, long)]
        bookmark: bool,

        /// Entry date (e.g., yesterday, last monday, 2025-01-17)
        #[arg(short, long, value_name = "DATE")]
        date: Option<String>,
    },

    /// List entries in the order they were written
    List,

    /// Show one entry in full
    Show {
        /// Entry id or unique id prefix
        id: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id or unique id prefix
        id: String,
    },

    /// Suggest reflection questions to write about
    Reflect {
        /// Number of questions
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
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
