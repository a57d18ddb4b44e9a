//! Per-domain reconciliation pipeline shared by every CLI command.
//!
//! ```text
//! LOAD_OR_CREATE -> GENERATE -> FETCH -> DIFF -> DESTROY_REMOVED -> CREATE_ADDED
//! ```
//!
//! Each [`Command`] runs a projection of this sequence. Within one domain the
//! steps are strictly ordered; removals are always destroyed before additions
//! are created. A failure stops that domain only.

use dozone_core::{Config, Record};
use dozone_provider::{DnsProvider, Domain, ProviderError};

use crate::diff::{diff_records, RecordDiff};
use crate::error::{apply_err, ApplyAction, SyncError};
use crate::fetch::fetch_records;
use crate::generate::generate_records;

/// Address a newly created domain's apex points at until the first sync.
pub const PLACEHOLDER_IP: &str = "127.0.0.1";

/// Which projection of the pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Desired records only.
    Gen,
    /// Live records only.
    Print,
    /// Desired vs live, no changes made.
    Diff,
    /// Destroy every live record.
    Clear,
    /// Destroy removals, then create additions.
    Sync,
}

/// What a command produced for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainOutcome {
    Generated(Vec<Record>),
    Fetched(Vec<Record>),
    Diffed(RecordDiff),
    /// The records that were destroyed.
    Cleared(Vec<Record>),
    /// The diff that was applied.
    Synced(RecordDiff),
}

/// Result of running a command against one configured domain.
#[derive(Debug)]
pub struct DomainRun {
    pub domain: String,
    pub result: Result<DomainOutcome, SyncError>,
}

/// Run `command` for every configured domain, in sorted name order.
///
/// A failing domain does not prevent the remaining domains from running.
pub fn run<P>(provider: &P, config: &Config, command: Command) -> Vec<DomainRun>
where
    P: DnsProvider + ?Sized,
{
    let mut runs = Vec::new();
    run_each(provider, config, command, |run| runs.push(run));
    runs
}

/// Like [`run`], but hands each [`DomainRun`] to `on_domain` as soon as that
/// domain finishes, before the next one starts.
pub fn run_each<P, F>(provider: &P, config: &Config, command: Command, mut on_domain: F)
where
    P: DnsProvider + ?Sized,
    F: FnMut(DomainRun),
{
    for name in config.domain_names() {
        let result = run_domain(provider, config, name, command);
        if let Err(err) = &result {
            tracing::error!(domain = %name, error = %err, "domain failed");
        }
        on_domain(DomainRun {
            domain: name.to_owned(),
            result,
        });
    }
}

/// Run `command` for a single domain.
pub fn run_domain<P>(
    provider: &P,
    config: &Config,
    name: &str,
    command: Command,
) -> Result<DomainOutcome, SyncError>
where
    P: DnsProvider + ?Sized,
{
    let domain = load_or_create(provider, name)?;

    let outcome = match command {
        Command::Gen => DomainOutcome::Generated(generate_records(config, &domain.name)?),
        Command::Print => DomainOutcome::Fetched(fetch_records(provider, &domain)?),
        Command::Diff => DomainOutcome::Diffed(plan(provider, config, &domain)?),
        Command::Clear => DomainOutcome::Cleared(clear(provider, &domain)?),
        Command::Sync => {
            let diff = plan(provider, config, &domain)?;
            apply(provider, &diff)?;
            DomainOutcome::Synced(diff)
        }
    };
    Ok(outcome)
}

/// Load `name`, creating it with [`PLACEHOLDER_IP`] when the provider reports
/// it as not found. Any other load error is returned unchanged.
pub fn load_or_create<P>(provider: &P, name: &str) -> Result<Domain, ProviderError>
where
    P: DnsProvider + ?Sized,
{
    match provider.load_domain(name) {
        Ok(domain) => Ok(domain),
        Err(err) if err.is_not_found() => {
            tracing::info!(domain = %name, ip = PLACEHOLDER_IP, "domain not found; creating");
            provider.create_domain(name, PLACEHOLDER_IP)
        }
        Err(err) => Err(err),
    }
}

/// Generate, fetch, and diff one domain.
fn plan<P>(provider: &P, config: &Config, domain: &Domain) -> Result<RecordDiff, SyncError>
where
    P: DnsProvider + ?Sized,
{
    let ideal = generate_records(config, &domain.name)?;
    let actual = fetch_records(provider, domain)?;
    let diff = diff_records(&ideal, &actual);
    tracing::debug!(
        domain = %domain.name,
        ideal = ideal.len(),
        actual = actual.len(),
        add = diff.add.len(),
        remove = diff.remove.len(),
        "planned changes"
    );
    Ok(diff)
}

/// Destroy every record in `diff.remove`, then create every record in `diff.add`.
///
/// Stops at the first rejected call; nothing is rolled back.
pub fn apply<P>(provider: &P, diff: &RecordDiff) -> Result<(), SyncError>
where
    P: DnsProvider + ?Sized,
{
    for record in &diff.remove {
        provider
            .destroy_record(record)
            .map_err(|e| apply_err(ApplyAction::Destroy, record, e))?;
    }
    for record in &diff.add {
        provider
            .create_record(record)
            .map_err(|e| apply_err(ApplyAction::Create, record, e))?;
    }
    Ok(())
}

/// Destroy every live record of `domain`, whatever the configuration says.
fn clear<P>(provider: &P, domain: &Domain) -> Result<Vec<Record>, SyncError>
where
    P: DnsProvider + ?Sized,
{
    let records = fetch_records(provider, domain)?;
    for record in &records {
        provider
            .destroy_record(record)
            .map_err(|e| apply_err(ApplyAction::Destroy, record, e))?;
    }
    tracing::info!(domain = %domain.name, destroyed = records.len(), "cleared domain");
    Ok(records)
}
