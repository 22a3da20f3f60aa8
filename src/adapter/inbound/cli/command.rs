//! Command-line interface definitions.
//!
//! Concourse runs the resource as `check`, `in <dir>` or `out <dir>` with the
//! request on stdin.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Deploy applications to Marathon from Concourse pipelines
#[derive(Parser, Debug)]
#[command(name = "marathon-resource")]
#[command(version)]
pub struct Cli {
    /// Log level filter (RUST_LOG takes precedence)
    #[arg(
        long,
        global = true,
        env = "MARATHON_RESOURCE_LOG_LEVEL",
        default_value = "info"
    )]
    pub log_level: String,

    /// Log format [pretty, json]
    #[arg(
        long,
        global = true,
        env = "MARATHON_RESOURCE_LOG_FORMAT",
        default_value = "pretty"
    )]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Resource commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List app versions at or after the current one
    Check,

    /// Fetch the app version
    #[command(name = "in")]
    In(InArgs),

    /// Deploy the app and wait for the rollout
    Out(OutArgs),
}

impl Commands {
    /// Message logged when the command fails.
    #[must_use]
    pub fn failure_message(&self) -> &'static str {
        match self {
            Commands::Check => "Unable to get APP versions from marathon",
            Commands::In(_) => "Unable to get APP info from marathon",
            Commands::Out(_) => "Unable to deploy APP to marathon",
        }
    }
}

/// Arguments for `in`.
#[derive(clap::Args, Debug)]
pub struct InArgs {
    /// Destination directory for fetched files
    pub destination: PathBuf,
}

/// Arguments for `out`.
#[derive(clap::Args, Debug)]
pub struct OutArgs {
    /// Directory holding the pipeline's inputs
    pub sources: PathBuf,
}
