//! WhatsApp header-line detection and field extraction.
//!
//! WhatsApp text exports carry no grammar: every message starts with a
//! locale-dependent timestamp header, and everything that is not a header is
//! either a continuation of the previous message or noise. The functions in
//! this module classify a single line and pull the structured fields out of
//! it. They are pure and never panic, even on lines shorter than the probed
//! offsets; an out-of-range probe is simply a non-match.
//!
//! Detection works on positional character checks rather than regexes because
//! the header layouts overlap: a dashed-date line whose message text contains
//! a `/` would otherwise be misread as a slash-format header.

use chrono::{DateTime, NaiveDateTime, Utc};

/// The literal body WhatsApp substitutes for an attachment it left out of
/// the export.
pub const MEDIA_MARKER: &str = "<Media omitted>";

/// How far into a line the detector looks for format markers.
///
/// All supported headers fit within this prefix; scanning further would start
/// matching markers inside the message text itself.
const SCAN_WINDOW: usize = 27;

/// Recognized header layouts, one per export locale/platform variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    /// `YYYY-MM-DD, H:MM a.m./p.m. - Sender: Message`
    DashedYmd12,
    /// `YYYY-MM-DD, HH:MM - Sender: Message`
    DashedYmd24,
    /// `[YYYY-MM-DD, H:MM:SS AM/PM] Sender: Message`
    BracketYmd12,
    /// `M/D/YY, H:MM AM/PM - Sender: Message`
    SlashMdy12,
    /// `[M/D/YY, H:MM:SS AM/PM] Sender: Message`, or the day-first
    /// `[D/M/YYYY, ...]` variant (tried second when parsing).
    BracketSlashes,
}

/// Returns the prefix of `line` the detector is allowed to inspect, clipped
/// to the nearest char boundary at or below [`SCAN_WINDOW`].
fn scan_window(line: &str) -> &str {
    if line.len() <= SCAN_WINDOW {
        return line;
    }
    let mut end = SCAN_WINDOW;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

/// Classifies a line as one of the supported header layouts.
///
/// Returns `None` for continuation lines and noise. The checks run in
/// priority order; the dashed formats must win before the slash formats so a
/// `/` later in the scan window cannot reclassify a dashed-date header.
pub fn detect(line: &str) -> Option<HeaderFormat> {
    let bytes = line.as_bytes();
    let head = scan_window(line);

    let dashed_date =
        bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-';
    let dotted_meridiem = head.contains(" p.m. - ") || head.contains(" a.m. - ");

    if dashed_date && dotted_meridiem {
        return Some(HeaderFormat::DashedYmd12);
    }
    if dashed_date {
        return Some(HeaderFormat::DashedYmd24);
    }

    let meridiem = head.contains("AM") || head.contains("PM");
    let bracketed = bytes.first() == Some(&b'[');

    if bracketed && meridiem && !head.contains('/') {
        return Some(HeaderFormat::BracketYmd12);
    }
    if !bracketed && meridiem && (bytes.get(1) == Some(&b'/') || bytes.get(2) == Some(&b'/')) {
        return Some(HeaderFormat::SlashMdy12);
    }
    if bracketed && meridiem && (bytes.get(2) == Some(&b'/') || bytes.get(3) == Some(&b'/')) {
        return Some(HeaderFormat::BracketSlashes);
    }

    None
}

/// System lines the exporter injects that carry no message at all.
const NOISE_MARKERS: [&str; 6] = [
    " are now secured with end-to-end encryption",
    "You created group ",
    "You added ",
    "You removed ",
    " changed this group's icon",
    " changed the subject from \"",
];

/// Returns `true` for lines that must be dropped outright: blank lines and
/// WhatsApp system notices (encryption banner, group membership events).
pub fn is_noise_line(line: &str) -> bool {
    line.is_empty() || NOISE_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Computes the byte offset where the sender name begins for a detected
/// header layout.
///
/// The dashed and bracketed Y-M-D layouts have fixed-width timestamps, so the
/// offset is a constant (with a one-byte probe for single- vs double-digit
/// hours in the 12-hour dashed case). The slash layouts have variable-width
/// dates and locate the sender after the first `-` or `]` instead.
///
/// Returns `None` when the line is too short for the layout or the offset
/// does not land on a char boundary; callers treat that as "not a header".
pub fn sender_start(line: &str, format: HeaderFormat) -> Option<usize> {
    let bytes = line.as_bytes();
    let start = match format {
        HeaderFormat::BracketYmd12 => 25,
        HeaderFormat::DashedYmd12 => {
            if bytes.get(24) == Some(&b' ') {
                25
            } else {
                24
            }
        }
        HeaderFormat::DashedYmd24 => 20,
        HeaderFormat::SlashMdy12 => line.find('-')? + 2,
        HeaderFormat::BracketSlashes => line.find(']')? + 2,
    };
    (start <= line.len() && line.is_char_boundary(start)).then_some(start)
}

/// Extracts the displayed sender name starting at `start`.
///
/// The name ends at the first space or colon, so multi-word contact names are
/// truncated to their first token ("Amir Abushanab" yields "Amir"). A name
/// with no terminator before end of line extends to the end of the line.
pub fn extract_sender(line: &str, start: usize) -> &str {
    let rest = &line[start..];
    match rest.find([' ', ':']) {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Locates the start of the message body: the byte just past the first `": "`
/// at or after the sender name.
pub fn text_start(line: &str, start: usize) -> Option<usize> {
    line[start..].find(": ").map(|at| start + at + 2)
}

/// Parses the timestamp prefix of a header line.
///
/// The prefix boundary is derived from the sender offset, so a line whose
/// header region is garbled (pasted text, morphed dates) fails here and gets
/// folded into the previous record by the caller instead of becoming a new
/// one.
pub fn extract_timestamp(line: &str, format: HeaderFormat, start: usize) -> Option<DateTime<Utc>> {
    match format {
        HeaderFormat::BracketYmd12 => {
            // Only the single-digit-hour variant puts the `]` two bytes
            // before the sender; anything else is not a parseable header.
            if line.as_bytes().get(start.checked_sub(2)?) != Some(&b']') {
                return None;
            }
            parse_naive(line.get(..start - 1)?, "[%Y-%m-%d, %I:%M:%S %p]")
        }
        HeaderFormat::DashedYmd12 => {
            let prefix = line.get(..start.checked_sub(3)?)?;
            // "a.m."/"p.m." lose their periods so chrono's %p can match.
            parse_naive(&prefix.replace('.', ""), "%Y-%m-%d, %I:%M %p")
        }
        HeaderFormat::DashedYmd24 => {
            parse_naive(line.get(..start.checked_sub(3)?)?, "%Y-%m-%d, %H:%M")
        }
        HeaderFormat::SlashMdy12 => {
            parse_naive(line.get(..start.checked_sub(3)?)?, "%m/%d/%y, %I:%M %p")
        }
        HeaderFormat::BracketSlashes => {
            let prefix = line.get(..start.checked_sub(1)?)?;
            // Month-first wins; the day-first locale variant is the fallback.
            parse_naive(prefix, "[%m/%d/%y, %I:%M:%S %p]")
                .or_else(|| parse_naive(prefix, "[%d/%m/%Y, %I:%M:%S %p]"))
        }
    }
}

fn parse_naive(prefix: &str, layout: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(prefix, layout)
        .ok()
        .map(|naive| naive.and_utc())
}
