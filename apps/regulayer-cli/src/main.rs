//! # regulayer-cli
//!
//! Command-line front end for the Regulayer SDK:
//! - `regulayer record` — report one decision and print its id
//! - `regulayer hash` — print the payload hash the SDK would send
//! - `regulayer id` — print a fresh decision id

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Report automated decisions to Regulayer.
#[derive(Parser)]
#[command(name = "regulayer", version, about)]
struct Cli {
    /// Log SDK activity at debug level (to stderr).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record one decision.
    Record(commands::record::RecordArgs),
    /// Print the SHA-256 payload hash of a JSON object.
    Hash {
        /// JSON object (or `null`) to hash.
        json: String,
    },
    /// Print a freshly generated decision id.
    Id,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for ids and hashes.
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("regulayer={level}").parse()?)
                .add_directive(format!("regulayer_cli={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match cli.command {
        Commands::Record(args) => {
            let id = commands::record::execute(&args, |name| std::env::var(name).ok())?;
            println!("{id}");
        }
        Commands::Hash { json } => println!("{}", commands::hash::execute(&json)?),
        Commands::Id => println!("{}", regulayer::generate_id()),
    }
    Ok(())
}
