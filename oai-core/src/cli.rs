//! CLI argument parsing for OAI
//!
//! Makes the TUI the default entry point when no subcommand is provided.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "oai")]
#[command(about = "OAI - guided custom ROM installer for Android devices")]
#[command(long_about = "OAI - guided custom ROM installer for Android devices\n\n\
    Run without arguments to open the addon step in the terminal UI.\n\
    Or use subcommands for CLI scripting.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Workflow state file shared between installer steps
    #[arg(long, default_value = "oai-state.json", global = true)]
    pub state: PathBuf,

    /// Write logs to this file instead of the default temp location
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Replace the built-in addon download links with a TOML file
    #[arg(long, global = true)]
    pub links: Option<PathBuf>,

    /// Dump TUI step render text to stdout and exit
    #[arg(long, global = true)]
    pub dump_tui: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record addon archives without the TUI (scripting)
    Addons {
        /// Addon archive to include (repeatable, order is kept)
        #[arg(long = "addon")]
        addons: Vec<PathBuf>,
    },

    /// Show the addons recorded in the workflow state
    Status,

    /// List addon download links, or open one in the browser
    Links {
        /// Link id to open (e.g. fdroid, gapps, microg)
        #[arg(long)]
        open: Option<String>,
    },
}
