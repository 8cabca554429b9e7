//! CLI module for the Invoice Dashboard API
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP server (default mode)
//! - `migrate`: apply pending database migrations and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Invoice Dashboard API - Form action backend for invoices and users
#[derive(Parser)]
#[command(name = "invoice-dashboard-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}
