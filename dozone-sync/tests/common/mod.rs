//! Shared test doubles for pipeline contract tests.
//!
//! `RecordingProvider` keeps zones in memory and records every call, so tests
//! can assert on the exact create/destroy sequence the pipeline issues.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use dozone_core::{Config, Record, RecordType, ZoneDocument};
use dozone_provider::{DnsProvider, Domain, ProviderError};

/// One provider call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    LoadDomain(String),
    CreateDomain { name: String, ip: String },
    GetRecords(String),
    CreateRecord(String),
    DestroyRecord(String),
}

#[derive(Default)]
pub struct RecordingProvider {
    zones: RefCell<BTreeMap<String, Vec<Record>>>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u64>,
    /// Domain whose load fails with `Unauthorized` instead of `NotFound`.
    broken_domain: Option<String>,
    /// Record data whose create is rejected.
    rejected_data: Option<String>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(100),
            ..Self::default()
        }
    }

    /// Seed an existing zone; records receive ids in the given order.
    pub fn with_zone(self, name: &str, records: Vec<Record>) -> Self {
        let records = records.into_iter().map(|r| r.with_id(self.alloc_id())).collect();
        self.zones.borrow_mut().insert(name.to_owned(), records);
        self
    }

    pub fn with_broken_domain(mut self, name: &str) -> Self {
        self.broken_domain = Some(name.to_owned());
        self
    }

    pub fn rejecting_create_of(mut self, data: &str) -> Self {
        self.rejected_data = Some(data.to_owned());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Only create/destroy calls.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::CreateRecord(_) | Call::DestroyRecord(_)))
            .collect()
    }

    pub fn zone(&self, name: &str) -> Vec<Record> {
        self.zones.borrow().get(name).cloned().unwrap_or_default()
    }

    pub fn has_zone(&self, name: &str) -> bool {
        self.zones.borrow().contains_key(name)
    }

    fn alloc_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl DnsProvider for RecordingProvider {
    fn load_domain(&self, name: &str) -> Result<Domain, ProviderError> {
        self.record(Call::LoadDomain(name.to_owned()));
        if self.broken_domain.as_deref() == Some(name) {
            return Err(ProviderError::Unauthorized("token revoked".into()));
        }
        if self.has_zone(name) {
            Ok(Domain::new(name))
        } else {
            Err(ProviderError::NotFound(format!("domain {name}")))
        }
    }

    fn create_domain(&self, name: &str, ip_address: &str) -> Result<Domain, ProviderError> {
        self.record(Call::CreateDomain {
            name: name.to_owned(),
            ip: ip_address.to_owned(),
        });
        // DigitalOcean seeds the apex with the given address
        let apex = Record::new(name, RecordType::A, "@", ip_address).with_id(self.alloc_id());
        self.zones.borrow_mut().insert(name.to_owned(), vec![apex]);
        Ok(Domain::new(name))
    }

    fn get_records(&self, domain: &Domain) -> Result<Vec<Record>, ProviderError> {
        self.record(Call::GetRecords(domain.name.clone()));
        Ok(self.zone(&domain.name))
    }

    fn create_record(&self, record: &Record) -> Result<(), ProviderError> {
        self.record(Call::CreateRecord(record.to_string()));
        if self.rejected_data.as_deref() == Some(record.data.as_str()) {
            return Err(ProviderError::Api {
                status: 422,
                message: "record rejected".into(),
            });
        }
        let stored = record.clone().with_id(self.alloc_id());
        self.zones
            .borrow_mut()
            .entry(record.domain_name.clone())
            .or_default()
            .push(stored);
        Ok(())
    }

    fn destroy_record(&self, record: &Record) -> Result<(), ProviderError> {
        self.record(Call::DestroyRecord(record.to_string()));
        let id = record
            .id
            .ok_or_else(|| ProviderError::MissingRecordId(record.to_string()))?;
        let mut zones = self.zones.borrow_mut();
        let zone = zones.entry(record.domain_name.clone()).or_default();
        let before = zone.len();
        zone.retain(|r| r.id != Some(id));
        if zone.len() == before {
            return Err(ProviderError::NotFound(format!("record {id}")));
        }
        Ok(())
    }
}

pub fn config(yaml: &str) -> Config {
    Config::resolve(ZoneDocument::parse(yaml).expect("parse"), None).expect("config")
}

pub fn a(domain: &str, name: &str, data: &str) -> Record {
    Record::new(domain, RecordType::A, name, data)
}
