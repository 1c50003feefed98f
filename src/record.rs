//! The parsed message record.
//!
//! [`Record`] is the row type of the parser's output table and the contract
//! surface downstream enrichment (sentiment, profanity, entities) and
//! persistence consume: exactly a timestamp, a sender, and the raw text.
//!
//! Every record carries a real timestamp. Lines whose timestamp cannot be
//! parsed never become records; the assembler folds them into the previous
//! record's text instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single parsed chat message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | When the message was sent (export-local time, stored as UTC) |
/// | `sender` | `String` | Displayed sender name, truncated at the first space or colon |
/// | `raw_text` | `String` | Message body; newline-joined when the export spread it over several lines |
///
/// # Serialization
///
/// Serializes with serde; timestamps use RFC 3339.
///
/// ```
/// use chatlens::Record;
/// use chrono::{TimeZone, Utc};
///
/// let record = Record::new(
///     Utc.with_ymd_and_hms(2019, 7, 27, 14, 43, 0).unwrap(),
///     "Amir",
///     "well",
/// );
/// let json = serde_json::to_string(&record)?;
/// let back: Record = serde_json::from_str(&json)?;
/// assert_eq!(record, back);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,

    /// Displayed sender name.
    ///
    /// May be only the first token of the full exported contact name
    /// ("Amir Abushanab" is displayed as "Amir").
    pub sender: String,

    /// Raw message body, possibly multi-line.
    pub raw_text: String,
}

impl Record {
    /// Creates a record from its three fields.
    pub fn new(
        timestamp: DateTime<Utc>,
        sender: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            raw_text: raw_text.into(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the raw message text.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}
