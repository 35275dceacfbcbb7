mod commands;

use clap::{Parser, Subcommand};
use commands::{check, proxies, record, resolve};
use std::error::Error;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "moky")]
#[command(author, version, about = "Mock fixture resolution for a development mock server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn run(self) -> Result<(), Box<dyn Error>> {
        match self.command {
            Commands::Check(args) => check::run(args),
            Commands::Resolve(args) => resolve::run(args),
            Commands::Record(args) => record::run(args),
            Commands::Proxies(args) => proxies::run(args),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a config file and print a summary
    Check(check::CheckArgs),

    /// Resolve a request to its mock fixture and data
    Resolve(resolve::ResolveArgs),

    /// Record data as a request's mock
    Record(record::RecordArgs),

    /// Check the proxy selection against the proxy maps
    Proxies(proxies::ProxiesArgs),
}

fn main() {
    // Initialize tracing subscriber with env filter (e.g. MOKY_LOG=debug)
    let filter = match EnvFilter::try_from_env("MOKY_LOG") {
        Ok(f) => f,
        Err(_) => EnvFilter::new("info"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
