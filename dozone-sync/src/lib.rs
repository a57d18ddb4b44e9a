//! # dozone-sync
//!
//! Desired-state generation, live-state fetch, record diff, and the per-domain
//! reconciliation pipeline.
//!
//! Call [`pipeline::run`] to process every configured domain for one
//! [`Command`], or [`pipeline::run_domain`] for a single zone.

pub mod diff;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod pipeline;

pub use diff::{diff_records, same_record, RecordDiff};
pub use error::{ApplyAction, SyncError};
pub use fetch::fetch_records;
pub use generate::{generate_records, sort_records};
pub use pipeline::{Command, DomainOutcome, DomainRun};
