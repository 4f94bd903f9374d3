//! CLI module for the API gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// API gateway fronting the user and auth services
#[derive(Parser)]
#[command(name = "api-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the gateway server
    Serve,
}
