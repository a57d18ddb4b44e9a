//! dozone: reconcile DigitalOcean DNS zones against a YAML zone document.
//!
//! # Usage
//!
//! ```text
//! dozone gen   [<infile>]    print the records the document describes
//! dozone print [<infile>]    print the records live at the provider
//! dozone diff  [<infile>]    show what sync would remove (-) and add (+)
//! dozone sync  [<infile>]    apply the diff
//! dozone clear [<infile>]    destroy every live record of each domain
//! ```
//!
//! `<infile>` defaults to `-` (standard input). The API token comes from
//! `--token` / `DIGITALOCEAN_TOKEN`, falling back to the document's `token`.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use commands::{GlobalArgs, ZoneArgs};
use dozone_sync::Command;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "dozone",
    version,
    about = "Keep DigitalOcean DNS zones in sync with a YAML zone document",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the desired records for each domain.
    Gen(ZoneArgs),

    /// Print the live records for each domain.
    Print(ZoneArgs),

    /// Show the changes sync would make, without making them.
    Diff(ZoneArgs),

    /// Destroy every live record of each configured domain.
    Clear(ZoneArgs),

    /// Destroy stale records and create missing ones.
    Sync(ZoneArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (args, command) = match cli.command {
        Commands::Gen(args) => (args, Command::Gen),
        Commands::Print(args) => (args, Command::Print),
        Commands::Diff(args) => (args, Command::Diff),
        Commands::Clear(args) => (args, Command::Clear),
        Commands::Sync(args) => (args, Command::Sync),
    };
    args.run(&cli.global, command)
}

/// Log to stderr so stdout carries only the record listings.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
