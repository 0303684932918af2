//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Genealogical trees of vampires: creators, offspring, ancestry and seniority
#[derive(Parser, Debug)]
#[command(name = "bloodline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -d -d debug, -d -d -d trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Lineage file (default: lineage_file from config)
    #[arg(short, long, global = true, env = "BLOODLINE_FILE", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Additional config file
    #[arg(short = 'c', long = "config", global = true, value_hint = ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every bloodline as tree
    Tree,

    /// Number of creators between a vampire and its root
    Depth {
        /// Vampire name
        name: String,
    },

    /// Is the first vampire more senior than the second
    Senior {
        /// Vampire name
        name: String,
        /// Vampire to compare with
        other: String,
    },

    /// Closest common ancestor of two vampires
    Ancestor {
        /// Vampire name
        name: String,
        /// Other vampire name
        other: String,
    },

    /// Find a vampire by name (pre-order, first match)
    Find {
        /// Vampire name
        name: String,
        /// Only search below this vampire
        #[arg(long)]
        from: Option<String>,
    },

    /// Count offspring and descendants
    Count {
        /// Vampire name
        name: String,
    },

    /// List vampires by conversion year
    Collect {
        /// Only search below this vampire
        #[arg(long)]
        from: Option<String>,
        /// Converted strictly after this year
        #[arg(long, allow_hyphen_values = true)]
        after: Option<i32>,
        /// Converted strictly before this year
        #[arg(long, allow_hyphen_values = true)]
        before: Option<i32>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config path
    Path,
}
