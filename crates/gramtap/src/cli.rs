//! CLI argument definitions for gramtap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gramtap - manage Telegram API credentials and sessions.
#[derive(Parser, Debug)]
#[command(name = "gramtap")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this directory instead of the platform config directory
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enter and store your Telegram API ID and API hash
    Login {
        /// Ask again even if credentials are already stored
        #[arg(long)]
        setup: bool,
    },

    /// Show whether credentials and a session are stored
    Status {
        /// Print JSON instead of text (default follows settings.outputFormat)
        #[arg(long)]
        json: bool,
    },

    /// Forget the stored session, keeping API credentials
    Logout,

    /// Print the path of the configuration file
    ConfigPath,
}
