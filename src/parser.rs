//! The chat parser: a single-pass assembler over export lines.
//!
//! [`ChatParser`] threads the line-level primitives from [`crate::parsing`]
//! into complete records. It is an explicit two-state machine with one
//! mutable slot, the in-progress record:
//!
//! - a header line with a parseable timestamp closes the open record and
//!   starts a new one;
//! - a non-header line is appended to the open record (multi-line messages);
//! - a header-shaped line whose timestamp fails to parse is also appended —
//!   that is how pasted text containing old headers survives intact;
//! - media-placeholder lines are tallied per sender and never emitted;
//! - noise lines are dropped outright.
//!
//! A parser instance holds configuration only. All parse state is local to
//! one [`parse`](ChatParser::parse) call, so a single instance can serve
//! concurrent parses from multiple threads.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::ParserConfig;
use crate::counter::UsageCounter;
use crate::error::Result;
use crate::messenger::Messenger;
use crate::parsing::whatsapp;
use crate::record::Record;
use crate::table::RecordTable;

/// Parser for exported chat logs.
///
/// # Example
///
/// ```
/// use chatlens::{ChatParser, Messenger};
///
/// let export = "2019-07-27, 14:43 - Amir Abushanab: well\n\
///               and another line\n\
///               2019-07-27, 14:44 - Amir Abushanab: you see";
/// let table = ChatParser::new().parse(export, Messenger::WhatsApp)?;
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.records()[0].raw_text(), "well\nand another line");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Default)]
pub struct ChatParser {
    config: ParserConfig,
    counter: Option<Arc<dyn UsageCounter>>,
}

impl ChatParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            counter: None,
        }
    }

    /// Attaches a usage counter, updated best-effort after each parse.
    #[must_use]
    pub fn with_counter(mut self, counter: Arc<dyn UsageCounter>) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one export to completion and returns the record table.
    ///
    /// `messenger` selects the format family; the [`Messenger`] allow-list
    /// makes an unsupported kind unrepresentable here, so this only fails on
    /// genuinely exceptional conditions. Ordinary malformed exports never
    /// error: unexpected lines are folded into neighboring records.
    pub fn parse(&self, text: &str, messenger: Messenger) -> Result<RecordTable> {
        let table = match messenger {
            Messenger::WhatsApp => self.parse_whatsapp(text),
        };
        log::debug!(
            "parsed {} {} records across {} participants",
            table.len(),
            messenger,
            table.participants().len()
        );
        self.bump_counters(&table);
        Ok(table)
    }

    /// Reads an export file and parses it.
    pub fn parse_file(&self, path: &Path, messenger: Messenger) -> Result<RecordTable> {
        let text = fs::read_to_string(path)?;
        self.parse(&text, messenger)
    }

    fn parse_whatsapp(&self, text: &str) -> RecordTable {
        let mut records: Vec<Record> = Vec::new();
        let mut media_counts: HashMap<String, u64> = HashMap::new();
        let mut current: Option<Record> = None;

        for line in text.lines() {
            if self.config.skip_noise && whatsapp::is_noise_line(line) {
                continue;
            }

            let Some(format) = whatsapp::detect(line) else {
                append_continuation(&mut current, line);
                continue;
            };

            let Some(start) = whatsapp::sender_start(line, format) else {
                append_continuation(&mut current, line);
                continue;
            };

            // Media placeholders are tallied before any timestamp work so a
            // garbled media header still counts toward its sender.
            if line.contains(self.config.media_marker.as_str()) {
                let sender = whatsapp::extract_sender(line, start);
                *media_counts.entry(sender.to_owned()).or_insert(0) += 1;
                continue;
            }

            let Some(body_at) = whatsapp::text_start(line, start) else {
                append_continuation(&mut current, line);
                continue;
            };

            let Some(timestamp) = whatsapp::extract_timestamp(line, format, start) else {
                // Header-shaped but not a real date: pasted or morphed text.
                append_continuation(&mut current, line);
                continue;
            };

            if let Some(done) = current.take() {
                records.push(done);
            }
            current = Some(Record::new(
                timestamp,
                whatsapp::extract_sender(line, start),
                &line[body_at..],
            ));
        }

        if let Some(done) = current {
            records.push(done);
        }

        RecordTable::new(records, media_counts)
    }

    fn bump_counters(&self, table: &RecordTable) {
        let Some(counter) = self.counter.as_deref() else {
            return;
        };
        if let Err(err) = counter.add_chat() {
            log::warn!("skipping chat tally: {err}");
        }
        if let Err(err) = counter.add_records(table.len() as u64) {
            log::warn!("skipping record tally: {err}");
        }
    }
}

/// Appends a line to the open record, newline-joined.
///
/// Lines arriving before the first valid header have nothing to attach to
/// and are dropped.
fn append_continuation(current: &mut Option<Record>, line: &str) {
    if let Some(entry) = current.as_mut() {
        entry.raw_text.push('\n');
        entry.raw_text.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn parse(text: &str) -> RecordTable {
        ChatParser::new()
            .parse(text, Messenger::WhatsApp)
            .expect("parse")
    }

    #[test]
    fn test_empty_input() {
        let table = parse("");
        assert!(table.is_empty());
        assert!(table.participants().is_empty());
        assert!(table.media_counts().is_empty());
    }

    #[test]
    fn test_single_record() {
        let table = parse("2019-07-27, 14:43 - Amir Abushanab: well");
        assert_eq!(table.len(), 1);
        let record = &table.records()[0];
        assert_eq!(record.sender(), "Amir");
        assert_eq!(record.raw_text(), "well");
        assert_eq!(
            record.timestamp(),
            Utc.with_ymd_and_hms(2019, 7, 27, 14, 43, 0).unwrap()
        );
    }

    #[test]
    fn test_multiline_continuation() {
        let table = parse(
            "2019-07-27, 14:43 - Amir Abushanab: first\nsecond\nthird\n\
             2019-07-27, 14:44 - Amir Abushanab: next",
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].raw_text(), "first\nsecond\nthird");
        assert_eq!(table.records()[1].raw_text(), "next");
    }

    #[test]
    fn test_garbage_before_first_header_is_dropped() {
        let table = parse("orphan line\n2019-07-27, 14:43 - Amir: well");
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].raw_text(), "well");
    }

    #[test]
    fn test_media_lines_tallied_not_emitted() {
        let table = parse(
            "2019-07-27, 14:43 - Amir Abushanab: well\n\
             2019-07-27, 14:44 - Amir Abushanab: <Media omitted>\n\
             2019-07-27, 14:45 - Laila K: <Media omitted>\n\
             2019-07-27, 14:46 - Amir Abushanab: <Media omitted>",
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.media_counts().get("Amir"), Some(&2));
        assert_eq!(table.media_counts().get("Laila"), Some(&1));
        // Media-only senders never reach the participant list.
        assert_eq!(table.participants(), ["Amir"]);
    }

    #[test]
    fn test_media_line_does_not_disturb_open_record() {
        let table = parse(
            "2019-07-27, 14:43 - Amir: start\n\
             2019-07-27, 14:44 - Laila: <Media omitted>\n\
             still part of the first message",
        );
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.records()[0].raw_text(),
            "start\nstill part of the first message"
        );
        assert_eq!(table.media_counts().get("Laila"), Some(&1));
    }

    #[test]
    fn test_noise_lines_fully_ignored() {
        let table = parse(
            "2019-07-27, 14:43 - Amir: hello\n\
             \n\
             You added Laila\n\
             You removed Laila\n\
             You created group \"trip\"\n\
             Amir changed this group's icon\n\
             Messages to this group are now secured with end-to-end encryption.\n\
             world",
        );
        assert_eq!(table.len(), 1);
        // Noise lines do not even count as continuations.
        assert_eq!(table.records()[0].raw_text(), "hello\nworld");
    }

    #[test]
    fn test_unparseable_timestamp_merges_into_previous() {
        let table = parse(
            "2019-07-27, 14:43 - Amir: hello\n\
             2020-99-99, 14:43 - Bob: pasted garbage",
        );
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.records()[0].raw_text(),
            "hello\n2020-99-99, 14:43 - Bob: pasted garbage"
        );
        assert_eq!(table.participants(), ["Amir"]);
    }

    #[test]
    fn test_unparseable_timestamp_before_first_header_is_dropped() {
        let table = parse("2020-99-99, 14:43 - Bob: garbage\n2019-07-27, 14:43 - Amir: hi");
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].sender(), "Amir");
    }

    #[test]
    fn test_custom_media_marker() {
        let parser = ChatParser::with_config(
            ParserConfig::new().with_media_marker("<attachment omitted>"),
        );
        let table = parser
            .parse(
                "2019-07-27, 14:43 - Amir: <attachment omitted>",
                Messenger::WhatsApp,
            )
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.media_counts().get("Amir"), Some(&1));
    }

    #[test]
    fn test_counter_updates() {
        use crate::counter::MemoryCounter;

        let counter = Arc::new(MemoryCounter::new());
        let parser = ChatParser::new().with_counter(Arc::clone(&counter) as Arc<dyn UsageCounter>);
        parser
            .parse(
                "2019-07-27, 14:43 - Amir: a\n2019-07-27, 14:44 - Amir: b",
                Messenger::WhatsApp,
            )
            .unwrap();
        assert_eq!(counter.chats().unwrap(), 1);
        assert_eq!(counter.records().unwrap(), 2);
    }

    #[test]
    fn test_counter_failure_does_not_abort_parse() {
        use crate::error::ChatlensError;

        struct DownCounter;
        impl UsageCounter for DownCounter {
            fn add_chat(&self) -> Result<()> {
                Err(ChatlensError::counter("down"))
            }
            fn add_records(&self, _count: u64) -> Result<()> {
                Err(ChatlensError::counter("down"))
            }
            fn chats(&self) -> Result<u64> {
                Err(ChatlensError::counter("down"))
            }
            fn records(&self) -> Result<u64> {
                Err(ChatlensError::counter("down"))
            }
        }

        let parser = ChatParser::new().with_counter(Arc::new(DownCounter));
        let table = parser
            .parse("2019-07-27, 14:43 - Amir: hi", Messenger::WhatsApp)
            .unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let export = "2019-07-27, 14:43 - Amir: a\nmore\n2019-07-27, 14:44 - Laila: b";
        let first = parse(export);
        let second = parse(export);
        assert_eq!(first, second);
    }
}
