//! Command-line interface definition for txgate.
//!
//! This module defines the CLI structure using clap derive macros,
//! including all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::model::{TransactionId, TransactionType};

/// txgate - Transaction gateway client and echo service
///
/// A tool for issuing GET/POST/OPTIONS transaction calls against a
/// gateway endpoint, and for running the gateway echo service locally.
#[derive(Debug, Parser)]
#[command(name = "txgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "TXGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns the log level forced by the -v/-q flags, or None when
    /// the configuration file should decide.
    pub fn log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }

        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch a transaction from the gateway (GET)
    Fetch(FetchArgs),

    /// Submit a transaction to the gateway (POST)
    Submit(SubmitArgs),

    /// Ask the gateway for permitted methods and headers (OPTIONS)
    Options(OptionsArgs),

    /// Run the gateway echo service
    Serve(ServeArgs),

    /// Configuration file operations
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Arguments for the `fetch` subcommand.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Gateway base URL (overrides configuration)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Transaction identifier (integer or string)
    #[arg(short = 'i', long, value_parser = parse_transaction_id)]
    pub transaction_id: TransactionId,

    /// Transaction type (BUY or SELL)
    #[arg(short = 't', long = "type", value_parser = parse_transaction_type)]
    pub kind: TransactionType,

    /// Transaction amount
    #[arg(short, long)]
    pub amount: f64,
}

/// Arguments for the `submit` subcommand.
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Gateway base URL (overrides configuration)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Body identifier (integer or string)
    #[arg(short = 'i', long, value_parser = parse_transaction_id)]
    pub body_id: TransactionId,

    /// Transaction type (BUY or SELL)
    #[arg(short = 't', long = "type", value_parser = parse_transaction_type)]
    pub kind: TransactionType,

    /// Transaction amount
    #[arg(short, long)]
    pub amount: f64,
}

/// Arguments for the `options` subcommand.
#[derive(Debug, Args)]
pub struct OptionsArgs {
    /// Gateway base URL (overrides configuration)
    #[arg(short, long)]
    pub url: Option<String>,
}

/// Arguments for the `serve` subcommand.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Listen port
    #[arg(long, default_value = "8080")]
    pub port: u16,
}

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Validate the configuration file
    Validate,

    /// Show the current configuration
    Show,
}

/// Parse a transaction identifier from a string.
fn parse_transaction_id(s: &str) -> Result<TransactionId, String> {
    Ok(TransactionId::from(s))
}

/// Parse a transaction type from a string.
fn parse_transaction_type(s: &str) -> Result<TransactionType, String> {
    s.parse()
}
