//! Error types for dozone-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading the zone document and resolving
/// the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the input path (or standard input) failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error; serde_yaml carries line/column context.
    #[error("failed to parse zone document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The stream must hold an options document followed by a domains document.
    #[error("expected 2 YAML documents (options, domains), found {found}")]
    DocumentCount { found: usize },

    /// `domain` is always bound to the zone name and cannot be redefined.
    #[error("option name '{0}' is reserved")]
    ReservedOption(String),

    /// Neither the command line nor the document supplied a token.
    #[error("no API token specified")]
    MissingToken,
}
