//! Zone document loading and run configuration.
//!
//! # Document layout
//!
//! ```text
//! # document 1: options
//! token: <api token>            (optional when --token is given)
//! defaults:                     (rows applied to every domain)
//!   - A @ {ip}
//! ip: 203.0.113.10              (any other scalar key is a placeholder)
//! ---
//! # document 2: domains
//! example.com:
//!   - CNAME www @
//! example.org:                  (null means "defaults only")
//! ```
//!
//! # API pattern
//!
//! [`ZoneDocument`] is the parsed input, exactly as written. [`Config`] is the
//! immutable value a run works from: the document plus the resolved token.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;

/// Placeholder always bound to the zone name; documents may not redefine it.
pub const DOMAIN_PLACEHOLDER: &str = "domain";

// ---------------------------------------------------------------------------
// 1. Document types
// ---------------------------------------------------------------------------

/// First document of the stream.
#[derive(Clone, Default, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub token: Option<String>,

    /// Row templates applied to every domain, ahead of its own rows.
    #[serde(default, deserialize_with = "null_as_default")]
    pub defaults: Vec<String>,

    /// Every other key, available to row templates as `{key}`.
    #[serde(flatten)]
    pub values: BTreeMap<String, serde_yaml::Value>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("token", &self.token.as_ref().map(|_| "<REDACTED>"))
            .field("defaults", &self.defaults)
            .field("values", &self.values)
            .finish()
    }
}

/// The parsed two-document input stream.
#[derive(Debug, Clone, Default)]
pub struct ZoneDocument {
    pub options: Options,
    /// Domain name → extra row templates. `BTreeMap` keeps names sorted.
    pub domains: BTreeMap<String, Vec<String>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(transparent)]
struct DomainsDocument(BTreeMap<String, Option<Vec<String>>>);

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

impl ZoneDocument {
    /// Parse a YAML stream holding exactly two documents.
    ///
    /// A document that is empty or `null` counts as an empty mapping.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut documents = Vec::new();
        for document in serde_yaml::Deserializer::from_str(input) {
            documents.push(serde_yaml::Value::deserialize(document)?);
        }
        if documents.len() != 2 {
            return Err(ConfigError::DocumentCount {
                found: documents.len(),
            });
        }
        let domains_value = documents.pop().unwrap_or_default();
        let options_value = documents.pop().unwrap_or_default();

        let options: Options =
            serde_yaml::from_value::<Option<Options>>(options_value)?.unwrap_or_default();
        if options.values.contains_key(DOMAIN_PLACEHOLDER) {
            return Err(ConfigError::ReservedOption(DOMAIN_PLACEHOLDER.to_owned()));
        }

        let domains = serde_yaml::from_value::<Option<DomainsDocument>>(domains_value)?
            .map(|d| d.0)
            .unwrap_or_default()
            .into_iter()
            .map(|(name, rows)| (name, rows.unwrap_or_default()))
            .collect();

        Ok(Self { options, domains })
    }

    /// Read and parse the document at `path`; `-` reads standard input.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| io_err("<stdin>", e))?;
            buf
        } else {
            std::fs::read_to_string(path).map_err(|e| io_err(path, e))?
        };
        Self::parse(&contents)
    }
}

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.into(),
        source,
    }
}

// ---------------------------------------------------------------------------
// 3. Resolved run configuration
// ---------------------------------------------------------------------------

/// Immutable configuration for one run.
#[derive(Clone)]
pub struct Config {
    token: String,
    defaults: Vec<String>,
    options: BTreeMap<String, serde_yaml::Value>,
    domains: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Combine a document with an optional command-line token.
    ///
    /// The override wins over the document; empty strings count as absent.
    pub fn resolve(
        document: ZoneDocument,
        token_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let ZoneDocument { options, domains } = document;
        let token = token_override
            .filter(|t| !t.is_empty())
            .or(options.token)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        Ok(Self {
            token,
            defaults: options.defaults,
            options: options.values,
            domains,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Placeholder options (everything but `token` and `defaults`).
    pub fn options(&self) -> &BTreeMap<String, serde_yaml::Value> {
        &self.options
    }

    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    /// Configured domain names in sorted order.
    pub fn domain_names(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    /// Extra rows for `domain`; empty when the domain lists none.
    pub fn extras(&self, domain: &str) -> &[String] {
        self.domains.get(domain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Default rows followed by the domain's extra rows.
    pub fn rows<'a>(&'a self, domain: &str) -> impl Iterator<Item = &'a str> {
        self.defaults
            .iter()
            .chain(self.extras(domain))
            .map(String::as_str)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<REDACTED>")
            .field("defaults", &self.defaults)
            .field("options", &self.options)
            .field("domains", &self.domains)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
