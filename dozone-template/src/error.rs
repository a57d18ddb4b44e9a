//! Error types for dozone-template.

use std::num::ParseIntError;

use thiserror::Error;

use dozone_core::types::UnknownRecordType;

/// All errors that can arise while expanding a row template.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Fewer space-separated fields than the record type needs.
    #[error("row '{row}' is missing its {field}")]
    MissingField { row: String, field: &'static str },

    /// First field is not a managed record type.
    #[error("row '{row}': {source}")]
    UnknownType {
        row: String,
        #[source]
        source: UnknownRecordType,
    },

    /// Trailing MX field is not a valid preference value.
    #[error("row '{row}': invalid MX priority '{value}': {source}")]
    InvalidPriority {
        row: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// `{name}` names neither `domain` nor a declared option.
    #[error("row '{row}' references unknown placeholder '{{{name}}}'")]
    UnknownPlaceholder { row: String, name: String },

    /// The option exists but is a list, mapping, or null.
    #[error("row '{row}': option '{name}' is not a scalar value")]
    NonScalarOption { row: String, name: String },

    /// A lone `{` or `}` that is neither a placeholder nor an escape.
    #[error("row '{row}' has an unbalanced brace")]
    UnbalancedBrace { row: String },
}
