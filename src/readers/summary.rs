// src/readers/summary.rs

//! Implements `SummaryLogReader` statistics tracking struct.

#![allow(non_snake_case)]

use crate::common::Count;

use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SummaryLogReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Accumulated statistics about processing activity of a single MFT
/// event log processed by a [`LogReader`].
///
/// For CLI option `--summary`.
///
/// [`LogReader`]: crate::readers::logreader::LogReader
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct SummaryLogReader {
    /// Count of lines read, blank or not.
    pub LogReader_lines: Count,
    /// Count of blank lines (skipped before parsing).
    pub LogReader_lines_blank: Count,
    /// Count of lines parsed into an `Event`.
    pub LogReader_events: Count,
    /// Count of malformed lines dropped (and recorded).
    pub LogReader_lines_rejected: Count,
    /// Count of well-formed lines of unsupported event types,
    /// dropped silently.
    pub LogReader_lines_skipped: Count,
}

impl SummaryLogReader {
    /// Count of lines that did not become an `Event` for any reason.
    pub fn count_lines_dropped(&self) -> Count {
        self.LogReader_lines_blank + self.LogReader_lines_rejected + self.LogReader_lines_skipped
    }
}

impl fmt::Debug for SummaryLogReader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("SummaryLogReader")
            .field("lines", &self.LogReader_lines)
            .field("blank", &self.LogReader_lines_blank)
            .field("events", &self.LogReader_events)
            .field("rejected", &self.LogReader_lines_rejected)
            .field("skipped", &self.LogReader_lines_skipped)
            .finish()
    }
}
