use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fdrop")]
#[command(version)]
#[command(about = "Clipboard-like tool for files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the action log
    #[arg(long)]
    pub logs: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stage file(s)/folder(s) in the stash
    Add {
        /// Paths to stage
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// Copy staged items; the last token may be a destination directory
    Copy {
        /// Positions or basenames (e.g. 1 notes.txt), optional target dir last
        #[arg(required = true, num_args = 1..)]
        tokens: Vec<String>,
    },

    /// Move staged items; the last token may be a destination directory
    Move {
        /// Positions or basenames (e.g. 1 notes.txt), optional target dir last
        #[arg(required = true, num_args = 1..)]
        tokens: Vec<String>,
    },

    /// Copy everything from the stash
    Paste {
        /// Target directory (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Show the stash, or `stash keep` to copy without unstaging
    Stash {
        #[command(subcommand)]
        action: Option<StashAction>,
    },

    /// Empty the stash (staged files stay on disk)
    Clean,
}

#[derive(Subcommand, Debug)]
pub enum StashAction {
    /// Copy items but keep them staged
    Keep {
        /// Positions or basenames, optional target dir last
        #[arg(required = true, num_args = 1..)]
        tokens: Vec<String>,
    },
}
