//! dozone core library: record model, zone document loading, errors.
//!
//! Public API surface:
//! - [`types`]: [`Record`], [`RecordType`], [`RecordId`]
//! - [`config`]: [`ZoneDocument`] parsing and the resolved run [`Config`]
//! - [`error`]: [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, Options, ZoneDocument};
pub use error::ConfigError;
pub use types::{Record, RecordId, RecordType};
