//! Provider seam between the sync pipeline and a DNS host.

use dozone_core::Record;
use serde::Deserialize;

use crate::error::ProviderError;

/// A zone as the provider knows it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Domain {
    pub name: String,
    #[serde(default)]
    pub ttl: Option<u32>,
}

impl Domain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl: None,
        }
    }
}

/// Domain and record CRUD against a DNS host.
///
/// All calls block. Implementations do not retry; the caller decides what a
/// failure means.
pub trait DnsProvider {
    /// Fetch an existing domain. Absent domains yield [`ProviderError::NotFound`].
    fn load_domain(&self, name: &str) -> Result<Domain, ProviderError>;

    /// Create a domain whose apex initially points at `ip_address`.
    fn create_domain(&self, name: &str, ip_address: &str) -> Result<Domain, ProviderError>;

    /// Every managed-type record currently live for `domain`, in provider order.
    fn get_records(&self, domain: &Domain) -> Result<Vec<Record>, ProviderError>;

    fn create_record(&self, record: &Record) -> Result<(), ProviderError>;

    /// Delete a live record; it must carry the provider id it was fetched with.
    fn destroy_record(&self, record: &Record) -> Result<(), ProviderError>;
}
