//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Didactic tree toolkit: path-addressed binary and general trees with YAML persistence
#[derive(Parser, Debug)]
#[command(name = "treedoc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging. Multiple flags (-d, -dd, -ddd) increase verbosity
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a tree file with a single root node
    Init {
        /// Tree file to create
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Root value
        value: String,
    },

    /// Display a tree file
    Show {
        /// Tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Use general-mode child indices instead of L/R glyphs
        #[arg(short, long)]
        general: bool,
        /// Box-drawing output instead of path glyphs
        #[arg(short, long)]
        pretty: bool,
    },

    /// Display only nodes within a depth range (inclusive, root is depth 0)
    Range {
        /// Tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Minimum depth
        min_depth: usize,
        /// Maximum depth
        max_depth: usize,
        /// Use general-mode child indices instead of L/R glyphs
        #[arg(short, long)]
        general: bool,
    },

    /// Insert a value at a directional path ("LRL" or "0-2-1")
    Insert {
        /// Tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Directional path to the new node
        path: String,
        /// Value for the new node
        value: String,
        /// Interpret the path as general-mode indices
        #[arg(short, long)]
        general: bool,
    },

    /// Find the first node holding a value (pre-order)
    Find {
        /// Tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Value to search for
        value: String,
    },

    /// Replace a node's value in place
    Edit {
        /// Tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Current value
        old_value: String,
        /// New value
        new_value: String,
    },

    /// Delete the first node holding a value, promoting its children
    Delete {
        /// Tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Value of the node to delete
        value: String,
    },

    /// Empty the tree
    Clear {
        /// Tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
