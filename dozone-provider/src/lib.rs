//! # dozone-provider
//!
//! The DNS hosting collaborator: the [`DnsProvider`] trait the sync pipeline
//! drives, and [`DigitalOceanClient`], its blocking implementation over the
//! DigitalOcean v2 REST API.

pub mod digitalocean;
pub mod error;
pub mod provider;

pub use digitalocean::DigitalOceanClient;
pub use error::ProviderError;
pub use provider::{DnsProvider, Domain};
