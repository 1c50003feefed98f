//! Unified error types for chatlens.
//!
//! A single [`ChatlensError`] enum covers all error cases in the library.
//!
//! Parsing itself almost never fails: malformed lines inside a recognized
//! export are recovered locally (folded into neighboring records), so the
//! variants here are about everything around the parse — an unsupported
//! messenger kind, I/O, serialization, customization mismatches, and the
//! collaborator services.

use std::io;

use thiserror::Error;

use crate::messenger::Messenger;

/// A specialized [`Result`] type for chatlens operations.
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// The caller asked for a messenger kind the parser does not implement.
    ///
    /// This is a configuration error raised before any line processing.
    #[error(
        "unsupported messenger '{requested}' - expected one of: {}",
        Messenger::all_names().join(", ")
    )]
    UnsupportedMessenger {
        /// The messenger name that was requested.
        requested: String,
    },

    /// An I/O error occurred reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error (store entries).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output bytes were not valid UTF-8.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// An alias list did not line up with the participant list.
    #[error("expected {expected} aliases (one per participant), got {actual}")]
    AliasMismatch {
        /// Number of participants in the table.
        expected: usize,
        /// Number of aliases supplied.
        actual: usize,
    },

    /// An alias mapping left a participant without a new name.
    #[error("no alias supplied for participant '{participant}'")]
    MissingAlias {
        /// The participant the mapping does not cover.
        participant: String,
    },

    /// Customization was requested before anything was parsed.
    #[error("the record table is empty; nothing to customize")]
    EmptyTable,

    /// A stored entry could not be found for the given identifier.
    #[error("no processed data stored under id '{id}'")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The usage-counter service could not be reached.
    ///
    /// The parser treats this as best-effort and never propagates it; the
    /// variant exists for counter implementations to report with.
    #[error("counter service unavailable: {0}")]
    Counter(String),
}

impl ChatlensError {
    /// Creates an unsupported-messenger error for a requested kind.
    pub fn unsupported_messenger(requested: impl Into<String>) -> Self {
        ChatlensError::UnsupportedMessenger {
            requested: requested.into(),
        }
    }

    /// Creates a not-found error for a store lookup.
    pub fn not_found(id: impl Into<String>) -> Self {
        ChatlensError::NotFound { id: id.into() }
    }

    /// Creates a counter-unavailable error.
    pub fn counter(message: impl Into<String>) -> Self {
        ChatlensError::Counter(message.into())
    }

    /// Returns `true` if this is an unsupported-messenger error.
    pub fn is_unsupported_messenger(&self) -> bool {
        matches!(self, ChatlensError::UnsupportedMessenger { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a store not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChatlensError::NotFound { .. })
    }

    /// Returns `true` if this is a customization validation error.
    pub fn is_customization(&self) -> bool {
        matches!(
            self,
            ChatlensError::AliasMismatch { .. }
                | ChatlensError::MissingAlias { .. }
                | ChatlensError::EmptyTable
        )
    }
}
