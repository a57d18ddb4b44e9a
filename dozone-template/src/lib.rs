//! # dozone-template
//!
//! Expands row templates such as `MX @ mail.{domain}. 10` into [`Record`]s.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use dozone_template::{expand, TemplateContext};
//!
//! let ctx = TemplateContext::new("example.com", &BTreeMap::new());
//! let record = expand("MX @ mail.{domain}. 10", &ctx).unwrap();
//! assert_eq!(record.data, "mail.example.com.");
//! assert_eq!(record.priority, Some(10));
//! ```
//!
//! [`Record`]: dozone_core::Record

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{expand, parse_row, substitute};
pub use error::FormatError;
