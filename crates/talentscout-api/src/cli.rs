//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// TalentScout hiring-assistant server.
#[derive(Debug, Parser)]
#[command(name = "tscout", version, about = "TalentScout screening assistant API")]
pub struct Cli {
    /// Increase verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "TALENTSCOUT_PORT")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1", env = "TALENTSCOUT_HOST")]
        host: String,

        /// Model identifier sent to the provider
        #[arg(long, default_value = "gemini-1.5-flash", env = "TALENTSCOUT_MODEL")]
        model: String,

        /// Sampling temperature for the screening conversation
        #[arg(long, default_value = "0.7", env = "TALENTSCOUT_TEMPERATURE")]
        temperature: f64,
    },
}
