use std::io;

use clap::Parser;
use marathon_resource::adapter::inbound::cli::command::{Cli, Commands};
use marathon_resource::adapter::inbound::cli::{check, get, put};
use marathon_resource::infrastructure::config::logging::LoggingConfig;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    LoggingConfig::new(&cli.log_level, &cli.log_format).init();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let result = match &cli.command {
        Commands::Check => check::execute(stdin, stdout).await,
        Commands::In(args) => get::execute(args, stdin, stdout).await,
        Commands::Out(args) => put::execute(args, stdin, stdout).await,
    };

    if let Err(e) = result {
        error!(error = %e, kind = e.kind(), "{}", cli.command.failure_message());
        std::process::exit(1);
    }
}
