//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

/// chat-mock: terminal mock-up of a chat client
#[derive(Debug, Parser)]
#[command(name = "chat-mock")]
#[command(about = "Terminal mock-up of a chat client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level instead of info
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
