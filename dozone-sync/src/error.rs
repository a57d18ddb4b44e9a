//! Error types for dozone-sync.

use std::fmt;

use thiserror::Error;

use dozone_provider::ProviderError;
use dozone_template::FormatError;

/// Which mutation a provider rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyAction {
    Create,
    Destroy,
}

impl fmt::Display for ApplyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyAction::Create => write!(f, "create"),
            ApplyAction::Destroy => write!(f, "destroy"),
        }
    }
}

/// All errors that can stop work on a domain.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A row template could not be expanded.
    #[error("template error: {0}")]
    Format(#[from] FormatError),

    /// Loading, creating, or listing failed at the provider.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider rejected a record create or destroy.
    #[error("failed to {action} record '{record}': {source}")]
    Apply {
        action: ApplyAction,
        record: String,
        #[source]
        source: ProviderError,
    },
}

/// Convenience constructor for [`SyncError::Apply`].
pub(crate) fn apply_err(
    action: ApplyAction,
    record: &dozone_core::Record,
    source: ProviderError,
) -> SyncError {
    SyncError::Apply {
        action,
        record: record.to_string(),
        source,
    }
}
