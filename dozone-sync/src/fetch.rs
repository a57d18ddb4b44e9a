//! Actual state: live records with provider quirks normalised.

use dozone_core::{Record, RecordType};
use dozone_provider::{DnsProvider, Domain, ProviderError};

/// Fetch the live records of `domain`, in provider order.
///
/// A CNAME whose data is the provider's `@` self-reference is rewritten to
/// the fully-qualified `<domain>.` so it compares equal to configured rows.
pub fn fetch_records<P>(provider: &P, domain: &Domain) -> Result<Vec<Record>, ProviderError>
where
    P: DnsProvider + ?Sized,
{
    let mut records = provider.get_records(domain)?;
    records.iter_mut().for_each(expand_self_reference);
    Ok(records)
}

fn expand_self_reference(record: &mut Record) {
    if record.record_type == RecordType::Cname && record.data == "@" {
        record.data = format!("{}.", record.domain_name);
    }
}
