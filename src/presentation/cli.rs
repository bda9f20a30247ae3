//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - The only positional argument is the group name; it defaults to
//!   `target-stores` when omitted
//! - Path flags override both the environment and the conventional locations

use std::path::PathBuf;

use clap::Parser;

use crate::config::SettingsOverrides;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// store-matrix - Resolve a store group into a CI deployment matrix
#[derive(Parser, Debug)]
#[command(name = "store-matrix")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Writes `stores` and `total_stores` to $GITHUB_OUTPUT when set.")]
pub struct Cli {
    /// Group of stores to deploy [default: target-stores]
    #[arg(value_name = "GROUP")]
    pub group: Option<String>,

    /// Path to the store registry document
    #[arg(long, value_name = "PATH")]
    pub stores: Option<PathBuf>,

    /// Path to the group table document
    #[arg(long, value_name = "PATH")]
    pub groups: Option<PathBuf>,

    /// Append the matrix to this file instead of $GITHUB_OUTPUT
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Settings given explicitly on the command line
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            group: self.group.clone(),
            stores_path: self.stores.clone(),
            groups_path: self.groups.clone(),
            output: self.output.clone(),
        }
    }
}
