//! DigitalOcean v2 DNS implementation of [`DnsProvider`](crate::DnsProvider).

pub mod client;
pub mod types;

pub use client::{DigitalOceanClient, DEFAULT_API_URL};
pub use types::{CreateDomainRequest, CreateRecordRequest, DomainRecord};
