//! Wire types for the DigitalOcean domains API.

use serde::{Deserialize, Serialize};

use dozone_core::{Record, RecordType};

use crate::error::ProviderError;
use crate::provider::Domain;

#[derive(Debug, Deserialize)]
pub(crate) struct DomainEnvelope {
    pub domain: Domain,
}

#[derive(Serialize)]
pub struct CreateDomainRequest<'a> {
    pub name: &'a str,
    pub ip_address: &'a str,
}

/// A record as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub data: String,
    #[serde(default)]
    pub priority: Option<u16>,
    #[serde(default)]
    pub ttl: Option<u32>,
}

#[derive(Serialize)]
pub struct CreateRecordRequest<'a> {
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub name: &'a str,
    pub data: &'a str,
    pub priority: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordsPage {
    pub domain_records: Vec<DomainRecord>,
    #[serde(default)]
    pub links: Option<Links>,
}

impl RecordsPage {
    pub fn next_page(&self) -> Option<&str> {
        self.links.as_ref()?.pages.as_ref()?.next.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Links {
    #[serde(default)]
    pub pages: Option<Pages>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pages {
    #[serde(default)]
    pub next: Option<String>,
}

impl DomainRecord {
    /// Convert to the record model.
    ///
    /// Returns `Ok(None)` for types dozone does not manage (SOA, SRV, CAA, …).
    /// Priority is kept only for MX, where it is mandatory.
    pub fn into_record(self, domain: &str) -> Result<Option<Record>, ProviderError> {
        let Ok(record_type) = self.record_type.parse::<RecordType>() else {
            return Ok(None);
        };
        let record = match record_type {
            RecordType::Mx => {
                let priority = self.priority.ok_or_else(|| {
                    ProviderError::InvalidRecord(format!("MX record {} has no priority", self.id))
                })?;
                Record::mx(domain, self.name, self.data, priority)
            }
            other => Record::new(domain, other, self.name, self.data),
        };
        Ok(Some(record.with_id(self.id)))
    }
}

impl<'a> From<&'a Record> for CreateRecordRequest<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            record_type: record.record_type.as_str(),
            name: &record.name,
            data: &record.data,
            priority: record.priority,
        }
    }
}
