//! # Chatlens
//!
//! A Rust library for parsing exported WhatsApp chat logs into structured,
//! analysis-ready record tables.
//!
//! ## Overview
//!
//! WhatsApp text exports are noisy: timestamp layouts vary by locale and
//! platform, messages span multiple lines, users paste old messages whose
//! embedded headers look like real ones, and the exporter sprinkles system
//! notices throughout. Chatlens normalizes all of that into a
//! [`RecordTable`] — rows of `timestamp` / `sender` / `raw_text`, the
//! participant list in first-appearance order, and a per-sender tally of
//! omitted-media lines — which downstream enrichment (sentiment, profanity,
//! emotion, entity scoring) and persistence consume.
//!
//! ## Quick Start
//!
//! ```
//! use chatlens::{ChatParser, Messenger};
//!
//! let export = "\
//! 2017-03-17, 11:57 a.m. - Sami: you tryna eat \n\
//! 2017-03-17, 1:06 p.m. - Amir Abushanab: No food";
//!
//! let table = ChatParser::new().parse(export, Messenger::WhatsApp)?;
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.participants(), ["Sami", "Amir"]);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ChatParser`], the single-pass line assembler
//! - [`parsing`] — per-messenger line primitives (format detection, field
//!   extraction)
//! - [`record`] / [`table`] — the output schema
//! - [`config`] — [`ParserConfig`]
//! - [`output`] — CSV serialization of the table
//! - [`store`] — [`store::ProcessedStore`] persistence collaborator
//! - [`counter`] — [`counter::UsageCounter`] best-effort usage tallies
//! - [`error`] — [`ChatlensError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod messenger;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod store;
pub mod table;

// Re-export the main types at the crate root for convenience
pub use config::ParserConfig;
pub use error::{ChatlensError, Result};
pub use messenger::Messenger;
pub use parser::ChatParser;
pub use record::Record;
pub use table::RecordTable;

/// Convenient re-exports for common usage.
///
/// ```
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::counter::{MemoryCounter, UsageCounter};
    pub use crate::error::{ChatlensError, Result};
    pub use crate::messenger::Messenger;
    pub use crate::output::{to_csv, write_csv};
    pub use crate::parser::ChatParser;
    pub use crate::record::Record;
    pub use crate::store::{FsStore, MemoryStore, ProcessedEntry, ProcessedStore};
    pub use crate::table::RecordTable;
}
