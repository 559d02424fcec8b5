use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tuner", version, about = "IPTV playlist catalog browser")]
pub struct Args {
    /// Increase log verbosity to debug
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding the saved source registry (defaults to the
    /// platform config directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a playlist and print its sorted category list
    Categories {
        /// Playlist location: a file path, file:// URI, or http(s) address
        location: String,
    },

    /// Load a playlist and print the channels of one category
    Channels {
        /// Playlist location: a file path, file:// URI, or http(s) address
        location: String,

        /// Category to display
        #[arg(short, long)]
        category: String,

        /// Case-insensitive name substring to narrow the list
        #[arg(short, long, default_value = "")]
        search: String,

        /// Print only the location of the displayed entry at this index
        /// (for handing off to an external player)
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Manage the saved playlist sources
    Sources {
        #[command(subcommand)]
        command: SourceCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum SourceCommand {
    /// List saved sources
    List,

    /// Add a saved source
    Add { name: String, source: String },

    /// Replace the saved source at an index
    Edit {
        index: usize,
        name: String,
        source: String,
    },

    /// Remove the saved source at an index
    Remove { index: usize },
}
