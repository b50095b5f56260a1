//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// VerseBot - Bible citation resolution and replies
#[derive(Parser, Debug)]
#[command(name = "versebot")]
#[command(about = "Resolve bracketed Bible citations and render VerseBot replies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load this configuration file instead of the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show how each citation in a message would resolve
    Inspect {
        /// Message text containing bracketed citations
        text: String,

        /// Community the message is posted in
        #[arg(long)]
        community: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Render the reply for a message using a local passages file
    Reply {
        /// Message text containing bracketed citations
        text: String,

        /// JSON array of passages to serve
        #[arg(long)]
        passages: PathBuf,

        /// Community the message is posted in, when the permalink names none
        #[arg(long)]
        community: Option<String>,

        /// Permalink of the message
        #[arg(long, default_value = "versebot://cli")]
        permalink: String,

        /// Author of the message
        #[arg(long, default_value = "versebot-cli")]
        author: String,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
