//! Listing format shared by every command that prints records.
//!
//! ```text
//! example.com
//!      MX 10         mail.example.com
//!       A @          1.2.3.4
//! ```
//!
//! One line per record: a one-character prefix, the type right-aligned in
//! five columns, then the MX priority (or the record name) left-aligned in
//! ten, then the data.

use std::fmt::Write as _;

use dozone_core::{Record, RecordType};
use dozone_sync::{DomainOutcome, RecordDiff};

const LISTED: char = ' ';
const REMOVED: char = '-';
const ADDED: char = '+';

/// Format a single record line, without the trailing newline.
pub fn format_record(prefix: char, record: &Record) -> String {
    let second = match (record.record_type, record.priority) {
        (RecordType::Mx, Some(priority)) => priority.to_string(),
        _ => record.name.clone(),
    };
    format!(
        "{prefix} {:>5} {:<10} {}",
        record.record_type, second, record.data
    )
}

/// Render what one domain produced. Empty when there is nothing to show.
pub fn render(domain: &str, outcome: &DomainOutcome) -> String {
    match outcome {
        DomainOutcome::Generated(records) | DomainOutcome::Fetched(records) => {
            listing(domain, records)
        }
        DomainOutcome::Diffed(diff) | DomainOutcome::Synced(diff) => changes(domain, diff),
        DomainOutcome::Cleared(_) => String::new(),
    }
}

fn listing(domain: &str, records: &[Record]) -> String {
    let mut out = format!("{domain}\n");
    for record in records {
        let _ = writeln!(out, "{}", format_record(LISTED, record));
    }
    out
}

fn changes(domain: &str, diff: &RecordDiff) -> String {
    if diff.is_empty() {
        return String::new();
    }
    let mut out = format!("{domain}\n");
    for record in &diff.remove {
        let _ = writeln!(out, "{}", format_record(REMOVED, record));
    }
    for record in &diff.add {
        let _ = writeln!(out, "{}", format_record(ADDED, record));
    }
    out
}
