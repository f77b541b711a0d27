//! CLI command definitions.

use clap::{Parser, Subcommand};
use relaybot::Channel;
use std::path::PathBuf;

/// Relaybot - multi-channel chatbot relay
#[derive(Parser, Debug)]
#[command(name = "relaybot")]
#[command(about = "Multi-channel chatbot relay with GitHub admin commands", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Read configuration from this file instead of the standard locations
    #[arg(short, long, global = true, env = "RELAYBOT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one message through the pipeline and print the reply
    Ask {
        /// Message text
        #[arg(required = true)]
        text: Vec<String>,

        /// Channel the message pretends to arrive on
        #[arg(long, default_value = "console")]
        channel: Channel,

        /// Sender identifier
        #[arg(long, default_value = "cli")]
        sender: String,

        /// Messenger page id, for page-specific replies
        #[arg(long)]
        page: Option<String>,

        /// Treat the text as a tapped quick-reply payload
        #[arg(long)]
        quick_reply: bool,
    },

    /// Run a GitHub command (`relaybot gh runs owner/repo`)
    Gh {
        /// Subcommand and parameter, as typed after `/gh`
        args: Vec<String>,
    },

    /// Print the effective configuration with secrets masked
    Config,
}
