//! CLI parse: clap types for ffs. No behavior; definitions only.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command line tool for working with a Flexible File Structure.
#[derive(Parser)]
#[command(name = "ffs", version)]
#[command(about = "Work with a Flexible File Structure: export, validate, create entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (repeatable).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read the FFS and its metadata into JSON.
    Export {
        /// Root entry directory.
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Sort keys in output.
        #[arg(short, long)]
        sort: bool,

        /// Indentation of output: none by default, 0 for newlines, a
        /// positive number N for N spaces, a negative number -N for N tabs.
        #[arg(short, long, allow_hyphen_values = true)]
        indent: Option<i32>,

        /// Un-nest the entries and print one object per line. The
        /// 'children' attribute is replaced by an array of string names,
        /// and the 'name' attribute now includes the entry's ancestors
        /// (/-separated). '--indent' is ignored.
        #[arg(short = 'l', long)]
        flatlines: bool,

        /// Depth to recurse into entries; negative (default) for
        /// infinite. Directories which are not valid entries are not
        /// explored.
        #[arg(short, long, default_value_t = -1, allow_hyphen_values = true)]
        recursion: i32,
    },

    /// List problems with the structure of the FFS.
    ///
    /// Prints a TSV with columns: comma-separated individuals responsible
    /// for the entry (or parent if unknown); path of the problem entry,
    /// relative to the given root; description of the problem.
    Problems {
        /// Root entry directory.
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Exit with an error code at the first problem.
        #[arg(short, long)]
        check: bool,

        /// Do not attempt to traverse below directories with malformed
        /// metadata.
        #[arg(short, long)]
        skip_problems: bool,
    },

    /// Create a new FFS entry.
    Create {
        /// Entry name; the date prefix is prepended.
        name: String,

        /// Parent directory for the new entry.
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// One-line description; prompted for when missing.
        #[arg(short, long)]
        description: Option<String>,

        /// Responsible party ("Name <email>"), repeatable; prompted for
        /// when missing.
        #[arg(short, long)]
        responsible: Vec<String>,

        /// Resolution of the date prefix.
        #[arg(short = 'D', long, value_enum, default_value_t = DateResolution::Day)]
        date_resolution: DateResolution,

        /// Date for the prefix, ISO format; today by default.
        #[arg(short, long)]
        today: Option<NaiveDate>,

        /// Mark the entry as a leaf (sets ignore: "*").
        #[arg(short, long)]
        leaf: bool,
    },
}

/// How much of the ISO date goes into a new entry's name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DateResolution {
    Year,
    Month,
    Day,
}
