//! Usage counters.
//!
//! The surrounding service keeps two running totals: how many chats have
//! been parsed and how many records those parses produced. [`UsageCounter`]
//! is the collaborator contract for that; the parser updates it best-effort
//! after a successful parse and never lets a counter failure abort the parse
//! (the failure is logged and the table is still returned).

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;

/// Increment-only counters fed by the parser.
///
/// Implementations may be backed by anything from process-local atomics
/// ([`MemoryCounter`]) to a remote database; the parser only requires that
/// failures are reported as errors, which it downgrades to warnings.
pub trait UsageCounter: Send + Sync {
    /// Records that one more chat was parsed.
    fn add_chat(&self) -> Result<()>;

    /// Records that `count` more message records were parsed.
    fn add_records(&self, count: u64) -> Result<()>;

    /// Returns the total number of chats parsed so far.
    fn chats(&self) -> Result<u64>;

    /// Returns the total number of records parsed so far.
    fn records(&self) -> Result<u64>;
}

/// Process-local counter on atomics. Never fails.
#[derive(Debug, Default)]
pub struct MemoryCounter {
    chats: AtomicU64,
    records: AtomicU64,
}

impl MemoryCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UsageCounter for MemoryCounter {
    fn add_chat(&self) -> Result<()> {
        self.chats.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn add_records(&self, count: u64) -> Result<()> {
        self.records.fetch_add(count, Ordering::Relaxed);
        Ok(())
    }

    fn chats(&self) -> Result<u64> {
        Ok(self.chats.load(Ordering::Relaxed))
    }

    fn records(&self) -> Result<u64> {
        Ok(self.records.load(Ordering::Relaxed))
    }
}
