//! Shared arguments and the run loop behind every subcommand.
//!
//! All five subcommands take the same input and differ only in which
//! [`Command`] projection of the pipeline they run and how the outcome is
//! printed.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use dozone_core::{Config, ZoneDocument};
use dozone_provider::{digitalocean::DEFAULT_API_URL, DigitalOceanClient};
use dozone_sync::{pipeline, Command};

use crate::output;

/// Options accepted before or after the subcommand name.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// DigitalOcean API token; overrides the document's `token` option.
    #[arg(long, global = true, env = "DIGITALOCEAN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the DigitalOcean v2 API.
    #[arg(long, global = true, env = "DOZONE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

/// Input for `gen`, `print`, `diff`, `clear` and `sync`.
#[derive(Args, Debug)]
pub struct ZoneArgs {
    /// Zone document to read; `-` reads standard input.
    #[arg(default_value = "-")]
    pub infile: PathBuf,
}

impl ZoneArgs {
    pub fn run(self, global: &GlobalArgs, command: Command) -> Result<()> {
        let document = ZoneDocument::read(&self.infile)
            .with_context(|| format!("failed to load zone document {}", self.infile.display()))?;
        // the token check comes before any provider call
        let config = Config::resolve(document, global.token.clone())?;

        let client = DigitalOceanClient::with_base_url(config.token(), global.api_url.as_str());
        tracing::debug!(?client, ?command, "starting run");

        let mut total = 0;
        let mut failed = Vec::new();
        pipeline::run_each(&client, &config, command, |run| {
            total += 1;
            match run.result {
                Ok(outcome) => {
                    print!("{}", output::render(&run.domain, &outcome));
                    // keep listings visible while later domains are still running
                    let _ = io::stdout().flush();
                }
                Err(_) => failed.push(run.domain),
            }
        });

        if !failed.is_empty() {
            bail!(
                "{} of {} domains failed: {}",
                failed.len(),
                total,
                failed.join(", ")
            );
        }
        Ok(())
    }
}
