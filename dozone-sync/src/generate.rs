//! Desired state: default rows plus domain rows, expanded and ordered.

use dozone_core::{Config, Record};
use dozone_template::{expand, FormatError, TemplateContext};

/// Expand every row configured for `domain` and return them in listing order.
///
/// Default rows come first, then the domain's own rows; the final order is
/// decided by [`sort_records`] alone.
pub fn generate_records(config: &Config, domain: &str) -> Result<Vec<Record>, FormatError> {
    let ctx = TemplateContext::new(domain, config.options());
    let mut records = config
        .rows(domain)
        .map(|row| expand(row, &ctx))
        .collect::<Result<Vec<_>, _>>()?;
    sort_records(&mut records);
    Ok(records)
}

/// Stable sort by `(type rank, name, priority, data)`.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
