use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Firmware update container tool", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). FWC_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract every file of a container into a directory
    Extract {
        container: PathBuf,
        dest: PathBuf,

        /// Write exactly `file_size` bytes instead of the padded chunk
        #[arg(long)]
        exact: bool,

        /// Check ranges and paths, write nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// List the files of a container
    List {
        container: PathBuf,

        /// Emit JSON rows
        #[arg(long)]
        json: bool,
    },

    /// Show the root descriptor and layout check
    Info {
        container: PathBuf,

        #[arg(long)]
        json: bool,
    },
}
