use std::fmt;
use std::time::Duration;

use dozone_core::Record;

use crate::digitalocean::types::{
    CreateDomainRequest, CreateRecordRequest, DomainEnvelope, RecordsPage,
};
use crate::error::ProviderError;
use crate::provider::{DnsProvider, Domain};

/// Production API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.digitalocean.com/v2";

/// Timeout applied to every request.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Records requested per page when listing a domain.
const PAGE_SIZE: u32 = 200;

/// Blocking DigitalOcean DNS client authenticated with a bearer token.
pub struct DigitalOceanClient {
    /// Never logged; redacted from `Debug`.
    token: String,
    base_url: String,
    agent: ureq::Agent,
}

impl fmt::Debug for DigitalOceanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitalOceanClient")
            .field("token", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DigitalOceanClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Point the client at another endpoint (staging, or a mock server in tests).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(HTTP_TIMEOUT).build();
        Self {
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        tracing::debug!(%method, %url, "provider request");
        self.agent
            .request(method, url)
            .set("Authorization", &format!("Bearer {}", self.token))
    }

    fn records_url(&self, domain: &str) -> String {
        format!("{}/domains/{}/records", self.base_url, domain)
    }
}

impl DnsProvider for DigitalOceanClient {
    fn load_domain(&self, name: &str) -> Result<Domain, ProviderError> {
        let url = format!("{}/domains/{}", self.base_url, name);
        let envelope: DomainEnvelope = self.request("GET", &url).call()?.into_json()?;
        Ok(envelope.domain)
    }

    fn create_domain(&self, name: &str, ip_address: &str) -> Result<Domain, ProviderError> {
        let url = format!("{}/domains", self.base_url);
        let body = CreateDomainRequest { name, ip_address };
        let envelope: DomainEnvelope = self.request("POST", &url).send_json(body)?.into_json()?;
        Ok(envelope.domain)
    }

    fn get_records(&self, domain: &Domain) -> Result<Vec<Record>, ProviderError> {
        let mut records = Vec::new();
        let mut next = Some(format!("{}?per_page={PAGE_SIZE}", self.records_url(&domain.name)));

        while let Some(url) = next.take() {
            let page: RecordsPage = self.request("GET", &url).call()?.into_json()?;
            next = page.next_page().map(str::to_owned);
            for wire in page.domain_records {
                let (id, kind) = (wire.id, wire.record_type.clone());
                match wire.into_record(&domain.name)? {
                    Some(record) => records.push(record),
                    None => tracing::debug!(
                        domain = %domain.name,
                        id,
                        record_type = %kind,
                        "skipping unmanaged record type"
                    ),
                }
            }
        }

        tracing::debug!(domain = %domain.name, count = records.len(), "fetched records");
        Ok(records)
    }

    fn create_record(&self, record: &Record) -> Result<(), ProviderError> {
        let url = self.records_url(&record.domain_name);
        self.request("POST", &url)
            .send_json(CreateRecordRequest::from(record))?;
        tracing::info!(domain = %record.domain_name, record = %record, "created record");
        Ok(())
    }

    fn destroy_record(&self, record: &Record) -> Result<(), ProviderError> {
        let id = record
            .id
            .ok_or_else(|| ProviderError::MissingRecordId(record.to_string()))?;
        let url = format!("{}/{}", self.records_url(&record.domain_name), id);
        self.request("DELETE", &url).call()?;
        tracing::info!(domain = %record.domain_name, record = %record, %id, "destroyed record");
        Ok(())
    }
}
