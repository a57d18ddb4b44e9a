//! Record diff: what to add and what to remove so live state matches config.
//!
//! Two records are the *same record* when type, name, priority, and data agree,
//! with data compared ignoring trailing dots. `domain_name` and the provider id
//! take no part: both sides are already scoped to one zone.
//!
//! Matching is a multiset pairing. Each ideal record claims the first actual
//! record, by position, that is the same record and not yet claimed, so
//! duplicates pair one-to-one up to the smaller count.

use dozone_core::Record;

/// Records to create and records to destroy for one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDiff {
    /// Ideal records with no live counterpart, in ideal order.
    pub add: Vec<Record>,
    /// Live records with no ideal counterpart, in provider order.
    pub remove: Vec<Record>,
}

impl RecordDiff {
    /// `true` when the domain is already synchronised.
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// The equality relation used for pairing.
pub fn same_record(ideal: &Record, actual: &Record) -> bool {
    ideal.record_type == actual.record_type
        && ideal.name == actual.name
        && ideal.data.trim_end_matches('.') == actual.data.trim_end_matches('.')
        && ideal.priority == actual.priority
}

/// Pair `ideal` against `actual` and return the unpaired leftovers of each.
pub fn diff_records(ideal: &[Record], actual: &[Record]) -> RecordDiff {
    let mut claimed = vec![false; actual.len()];
    let mut add = Vec::new();

    for need in ideal {
        let hit = actual
            .iter()
            .enumerate()
            .position(|(i, have)| !claimed[i] && same_record(need, have));
        match hit {
            Some(i) => claimed[i] = true,
            None => add.push(need.clone()),
        }
    }

    let remove = actual
        .iter()
        .zip(claimed)
        .filter(|&(_, was_claimed)| !was_claimed)
        .map(|(have, _)| have.clone())
        .collect();

    RecordDiff { add, remove }
}
