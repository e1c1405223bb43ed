// src/readers/logreader.rs

//! Implements a [`LogReader`], the driver of line parsing for one MFT
//! event log file.
//!
//! The processing model is batch/offline: the whole file is read in one
//! bounded pass, every non-blank line is handed to [`parse_line`], and
//! the successfully parsed [`Event`]s are kept in original line order.
//! One bad line never fails the run; malformed lines are dropped and
//! recorded as [`RejectedLine`]s (also warned to stderr in debug
//! builds), unsupported event types are dropped silently.
//!
//! This is a _mftmlib_ structure used by the binary program _mftm_.
//!
//! [`parse_line`]: crate::data::event::parse_line
//! [`Event`]: crate::data::event::Event

use crate::common::{Count, FPath, LineNum};
use crate::data::event::{
    parse_line,
    Event,
    RejectReason,
    ResultParseLine,
};
use crate::de_wrn;
use crate::readers::summary::SummaryLogReader;

use std::fs::read_to_string;
use std::io::Result;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RejectedLine
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One malformed line dropped during processing: where it was, why it
/// was rejected, and the offending line itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RejectedLine {
    /// 1-based line number within the processed input.
    pub line_num: LineNum,
    /// Why the line was rejected.
    pub reason: RejectReason,
    /// The raw line, trimmed.
    pub line: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// process_lines
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Everything one processing pass produces: the ordered [`Event`]s,
/// the recorded rejections, and the processing counts.
#[derive(Clone, Debug, Default)]
pub struct ProcessedLog {
    /// Successfully parsed events, preserving relative input order.
    pub events: Vec<Event>,
    /// Malformed lines, in input order.
    pub rejected: Vec<RejectedLine>,
    /// Processing counts.
    pub summary: SummaryLogReader,
}

/// Process a sequence of raw lines in order.
///
/// For each non-blank line call [`parse_line`]; append only successful
/// [`Event`]s, preserving relative order. Never fails the whole pass
/// due to one bad line — a malformed line is recorded (and a
/// debug-build warning printed), an unsupported line is counted and
/// dropped silently.
pub fn process_lines<'a, I>(lines: I) -> ProcessedLog
where
    I: IntoIterator<Item = &'a str>,
{
    defn!();
    let mut processed = ProcessedLog::default();
    for (index, raw) in lines.into_iter().enumerate() {
        let line_num: LineNum = index + 1;
        processed.summary.LogReader_lines += 1;
        if raw.trim().is_empty() {
            processed.summary.LogReader_lines_blank += 1;
            continue;
        }
        match parse_line(raw) {
            ResultParseLine::Parsed(event) => {
                processed.summary.LogReader_events += 1;
                processed
                    .events
                    .push(event);
            }
            ResultParseLine::Rejected(reason) => {
                processed.summary.LogReader_lines_rejected += 1;
                de_wrn!("skipping malformed line {}: {} ({:?})", line_num, reason, raw.trim());
                processed
                    .rejected
                    .push(RejectedLine {
                        line_num,
                        reason,
                        line: raw.trim().to_string(),
                    });
            }
            ResultParseLine::Skipped => {
                processed.summary.LogReader_lines_skipped += 1;
            }
        }
    }
    defx!("events {}, rejected {}", processed.events.len(), processed.rejected.len());

    processed
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A `LogReader` processes one MFT event log file into an ordered
/// [`Event`] sequence.
pub struct LogReader {
    /// the path of the processed file
    path: FPath,
    /// the result of the processing pass
    processed: ProcessedLog,
}

impl LogReader {
    /// Create a new `LogReader`, reading and processing the file at
    /// `path` to completion. The only fatal error is failing to read
    /// the file itself.
    pub fn new(path: FPath) -> Result<LogReader> {
        defn!("({:?})", path);
        let text: String = read_to_string(&path)?;
        let processed = process_lines(text.lines());
        defx!("LogReader::new({:?})", path);

        Ok(LogReader { path, processed })
    }

    /// The path of the processed file.
    pub fn path(&self) -> &FPath {
        &self.path
    }

    /// The successfully parsed events, in original line order.
    pub fn events(&self) -> &[Event] {
        &self.processed.events
    }

    /// Consume the reader, keeping only the events.
    pub fn into_events(self) -> Vec<Event> {
        self.processed.events
    }

    /// The malformed lines dropped during processing.
    pub fn rejected(&self) -> &[RejectedLine] {
        &self.processed.rejected
    }

    /// Processing counts for this file.
    pub fn summary(&self) -> SummaryLogReader {
        self.processed.summary
    }

    /// Count of successfully parsed events.
    pub fn count_events(&self) -> Count {
        self.processed.summary.LogReader_events
    }
}

impl std::fmt::Debug for LogReader {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        f.debug_struct("LogReader")
            .field("path", &self.path)
            .field("events", &self.processed.events.len())
            .field("summary", &self.processed.summary)
            .finish()
    }
}
