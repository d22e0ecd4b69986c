//! Console rendering.
//!
//! One line per entry:
//!
//! ```text
//! 2024-12-07 19:06:54 [info] user:alice action:login
//! ```
//!
//! Every `key:value` pair is followed by a single space, so an entry with no
//! fields renders as the timestamp and level bracket followed by a space.

use std::fmt::Write as _;
use std::io::{self, Write};

use chrono::Local;

use crate::types::LogEntry;

/// Timestamp layout used on the console, in local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders an entry as a newline-terminated console line.
#[must_use]
pub fn render(entry: &LogEntry) -> String {
    let timestamp = entry.timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT);
    let mut line = format!("{timestamp} [{}] ", entry.level);
    for (key, value) in &entry.fields {
        let _ = write!(line, "{key}:{value} ");
    }
    line.push('\n');
    line
}

/// Writes the rendered entry to `writer` and flushes it.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_entry<W: Write + ?Sized>(writer: &mut W, entry: &LogEntry) -> io::Result<()> {
    writer.write_all(render(entry).as_bytes())?;
    writer.flush()
}
