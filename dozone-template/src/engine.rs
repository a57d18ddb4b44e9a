//! Row expansion: placeholder substitution followed by field parsing.
//!
//! # Row grammar
//!
//! | Type        | Shape                          |
//! |-------------|--------------------------------|
//! | MX          | `MX NAME DATA PRIORITY`        |
//! | everything  | `TYPE NAME DATA`               |
//!
//! The row is split on the first two single spaces, so `DATA` may contain
//! spaces (`TXT @ v=spf1 include:_spf.example.com -all`). For MX the trailing
//! field after the last space of the remainder is the priority.

use dozone_core::types::{Record, RecordType};

use crate::context::TemplateContext;
use crate::error::FormatError;

/// Replace every `{name}` in `row` with its value from `ctx`.
///
/// `{{` and `}}` produce literal braces.
pub fn substitute(row: &str, ctx: &TemplateContext) -> Result<String, FormatError> {
    let unbalanced = || FormatError::UnbalancedBrace {
        row: row.to_owned(),
    };

    let mut out = String::with_capacity(row.len());
    let mut chars = row.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '{' if chars.peek().map(|&(_, n)| n) == Some('{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let rest = &row[i + 1..];
                let end = rest.find(['{', '}']).ok_or_else(unbalanced)?;
                if !rest[end..].starts_with('}') {
                    return Err(unbalanced());
                }
                let name = &rest[..end];
                out.push_str(ctx.lookup(name, row)?);
                // skip the name and the closing brace
                for _ in 0..=name.chars().count() {
                    chars.next();
                }
            }
            '}' if chars.peek().map(|&(_, n)| n) == Some('}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(unbalanced()),
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Parse an already-substituted row into a [`Record`] for `domain`.
pub fn parse_row(row: &str, domain: &str) -> Result<Record, FormatError> {
    let missing = |field| FormatError::MissingField {
        row: row.to_owned(),
        field,
    };

    let mut fields = row.splitn(3, ' ');
    let kind = fields.next().unwrap_or_default();
    let name = fields.next().ok_or_else(|| missing("name"))?;
    let rest = fields.next().ok_or_else(|| missing("data"))?;

    let record_type: RecordType = kind.parse().map_err(|source| FormatError::UnknownType {
        row: row.to_owned(),
        source,
    })?;

    if record_type != RecordType::Mx {
        return Ok(Record::new(domain, record_type, name, rest));
    }

    let (data, priority) = rest.rsplit_once(' ').ok_or_else(|| missing("priority"))?;
    let priority = priority
        .parse::<u16>()
        .map_err(|source| FormatError::InvalidPriority {
            row: row.to_owned(),
            value: priority.to_owned(),
            source,
        })?;
    Ok(Record::mx(domain, name, data, priority))
}

/// Substitute placeholders in `row`, then parse it for `ctx`'s domain.
pub fn expand(row: &str, ctx: &TemplateContext) -> Result<Record, FormatError> {
    let resolved = substitute(row, ctx)?;
    parse_row(&resolved, ctx.domain())
}
