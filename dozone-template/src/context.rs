//! Template context: the fixed set of placeholder values for one domain.

use std::collections::BTreeMap;

use dozone_core::config::DOMAIN_PLACEHOLDER;

use crate::error::FormatError;

/// Placeholder values available while expanding rows for one domain.
///
/// Built once per domain from the zone name and the document's options.
/// Lookups of names outside this set fail; nothing is stringified implicitly.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    domain: String,
    /// `None` marks an option that exists but cannot be substituted.
    values: BTreeMap<String, Option<String>>,
}

impl TemplateContext {
    pub fn new(domain: &str, options: &BTreeMap<String, serde_yaml::Value>) -> Self {
        let values = options
            .iter()
            .map(|(name, value)| (name.clone(), scalar_to_string(value)))
            .collect();
        Self {
            domain: domain.to_owned(),
            values,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Resolve `name`; `row` is only used for error context.
    pub fn lookup(&self, name: &str, row: &str) -> Result<&str, FormatError> {
        if name == DOMAIN_PLACEHOLDER {
            return Ok(&self.domain);
        }
        match self.values.get(name) {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(FormatError::NonScalarOption {
                row: row.to_owned(),
                name: name.to_owned(),
            }),
            None => Err(FormatError::UnknownPlaceholder {
                row: row.to_owned(),
                name: name.to_owned(),
            }),
        }
    }
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        // capitalised, the spelling existing zone files were written against
        serde_yaml::Value::Bool(true) => Some("True".to_owned()),
        serde_yaml::Value::Bool(false) => Some("False".to_owned()),
        _ => None,
    }
}
