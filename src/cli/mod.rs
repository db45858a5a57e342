//! CLI module for the SyncSenta AI gateway
//!
//! Provides subcommands for running the gateway:
//! - `serve`: run the HTTP API server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// SyncSenta AI Gateway - tutoring and analysis completions for education
#[derive(Parser)]
#[command(name = "syncsenta-ai-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
