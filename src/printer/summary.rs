// src/printer/summary.rs

//! Print a colored summary report about processing: processing counts,
//! transfer statistics, monitor status, scheduled transfers, and the
//! categorized entity summary.
//!
//! For CLI option `--summary`.

use crate::common::{Count, FPath};
use crate::data::event::{Event, EventAttr, EventKind};
use crate::data::resultcode::{result_code_is_success, result_message};
use crate::data::scheduled::{ScheduledTransfer, ScheduledTransferOverview};
use crate::readers::logreader::RejectedLine;
use crate::readers::summary::SummaryLogReader;
use crate::reducers::categorizer::CategorizedSummary;

use std::collections::BTreeSet;
use std::io;
use std::io::Write;

use ::itertools::Itertools;
use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Color of section headers in the summary report.
const COLOR_HEADER: Color = Color::Cyan;
/// Color of "good" values (successful transfers, active entities).
const COLOR_GOOD: Color = Color::Green;
/// Color of "bad" values (failed transfers, malformed lines).
const COLOR_BAD: Color = Color::Red;
/// Color of "inactive" values (stopped monitors, expired schedules).
const COLOR_DIM: Color = Color::Yellow;

/// How many completed-transfer and scheduled-transfer rows to print.
const SUMMARY_ROWS_MAX: usize = 5;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TransferStats
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Successful vs failed counts over all events carrying a
/// `result_code` attribute.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransferStats {
    /// Count of events carrying a `result_code`.
    pub with_result_code: Count,
    /// Of those, count with a success code.
    pub successful: Count,
    /// Of those, count with a non-success code.
    pub failed: Count,
}

/// Compute [`TransferStats`] over `events` in one pass.
pub fn transfer_stats(events: &[Event]) -> TransferStats {
    let mut stats = TransferStats::default();
    for event in events.iter() {
        let code = match event.attr(EventAttr::ResultCode) {
            Some(code) => code,
            None => continue,
        };
        stats.with_result_code += 1;
        if result_code_is_success(code) {
            stats.successful += 1;
        } else {
            stats.failed += 1;
        }
    }

    stats
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// MonitorOverview
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Monitor status derived from `MACT` lifecycle events: a monitor is
/// _active_ if it was started and never stopped; _stopped_ if a stop
/// action was observed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MonitorOverview {
    /// Sorted distinct names of active monitors.
    pub active: Vec<String>,
    /// Sorted distinct names of stopped monitors.
    pub stopped: Vec<String>,
}

/// Compute the [`MonitorOverview`] over `events` in one pass.
pub fn monitor_overview(events: &[Event]) -> MonitorOverview {
    let mut started: BTreeSet<&str> = BTreeSet::new();
    let mut stopped: BTreeSet<&str> = BTreeSet::new();
    for event in events.iter() {
        if event.kind != EventKind::MACT {
            continue;
        }
        let monitor_name = match event.attr(EventAttr::MonitorName) {
            Some(monitor_name) => monitor_name,
            None => continue,
        };
        match event.attr(EventAttr::Action) {
            Some("start") => {
                started.insert(monitor_name);
            }
            Some("stop") => {
                stopped.insert(monitor_name);
            }
            _ => {}
        }
    }

    MonitorOverview {
        active: started
            .difference(&stopped)
            .map(|name| name.to_string())
            .collect(),
        stopped: stopped
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// print_summary
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn write_header(
    out: &mut StandardStream,
    text: &str,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(COLOR_HEADER)))?;
    writeln!(out, "{}", text)?;
    out.reset()
}

fn write_count(
    out: &mut StandardStream,
    label: &str,
    count: Count,
    color_opt: Option<Color>,
) -> io::Result<()> {
    write!(out, "  {:<26}", label)?;
    if let Some(color) = color_opt {
        // only color nonzero counts; a zero is unremarkable
        if count > 0 {
            out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        }
    }
    writeln!(out, "{}", count)?;
    out.reset()
}

fn write_names(
    out: &mut StandardStream,
    label: &str,
    names: &[String],
) -> io::Result<()> {
    writeln!(out, "  {:<26}{}", label, names.join(", "))
}

fn write_overview_row(
    out: &mut StandardStream,
    overview: &ScheduledTransferOverview,
) -> io::Result<()> {
    let unset = || "?".to_string();
    writeln!(
        out,
        "  {} scheduled by {} on {} ({}) {} → {} {} → {}",
        overview.reference_id,
        overview
            .scheduled_by
            .clone()
            .unwrap_or_else(unset),
        overview
            .agent
            .clone()
            .unwrap_or_else(unset),
        overview
            .timezone
            .clone()
            .unwrap_or_else(unset),
        overview
            .source_agent
            .clone()
            .unwrap_or_else(unset),
        overview
            .destination_agent
            .clone()
            .unwrap_or_else(unset),
        overview
            .source_file
            .clone()
            .unwrap_or_else(unset),
        overview
            .destination_file
            .clone()
            .unwrap_or_else(unset),
    )
}

/// Print the full summary report to stdout.
#[allow(clippy::too_many_arguments)]
pub fn print_summary(
    path: &FPath,
    summary: &SummaryLogReader,
    rejected: &[RejectedLine],
    events: &[Event],
    scheduled: &[ScheduledTransfer],
    categorized: &CategorizedSummary,
    color_choice: ColorChoice,
) -> io::Result<()> {
    let mut out = StandardStream::stdout(color_choice);

    write_header(&mut out, "Processing:")?;
    writeln!(out, "  {:<26}{:?}", "file", path)?;
    write_count(&mut out, "lines", summary.LogReader_lines, None)?;
    write_count(&mut out, "lines blank", summary.LogReader_lines_blank, None)?;
    write_count(&mut out, "events parsed", summary.LogReader_events, Some(COLOR_GOOD))?;
    write_count(&mut out, "lines malformed", summary.LogReader_lines_rejected, Some(COLOR_BAD))?;
    write_count(&mut out, "lines unsupported", summary.LogReader_lines_skipped, None)?;
    if !rejected.is_empty() {
        write_header(&mut out, "Malformed lines:")?;
        for rejected_line in rejected.iter() {
            out.set_color(ColorSpec::new().set_fg(Some(COLOR_BAD)))?;
            write!(out, "  line {}", rejected_line.line_num)?;
            out.reset()?;
            writeln!(out, ": {}: {:?}", rejected_line.reason, rejected_line.line)?;
        }
    }

    let stats = transfer_stats(events);
    write_header(&mut out, "Transfer statistics:")?;
    write_count(&mut out, "events with result code", stats.with_result_code, None)?;
    write_count(&mut out, "successful", stats.successful, Some(COLOR_GOOD))?;
    write_count(&mut out, "failed", stats.failed, Some(COLOR_BAD))?;

    let completed: Vec<&Event> = events
        .iter()
        .filter(|event| event.kind == EventKind::TCOM)
        .sorted_by(|event_a, event_b| {
            event_b
                .dt
                .cmp(&event_a.dt)
        })
        .take(SUMMARY_ROWS_MAX)
        .collect();
    if !completed.is_empty() {
        write_header(&mut out, "Last completed transfers:")?;
        for event in completed.iter() {
            let code = event
                .attr(EventAttr::ResultCode)
                .unwrap_or("");
            let (status, color) = match result_code_is_success(code) {
                true => ("Successful", COLOR_GOOD),
                false => ("Failed", COLOR_BAD),
            };
            write!(
                out,
                "  {} {} {} → {} ",
                event.timestamp_iso8601(),
                event.reference_id,
                event
                    .attr(EventAttr::SourceAgent)
                    .unwrap_or("?"),
                event
                    .attr(EventAttr::DestinationAgent)
                    .unwrap_or("?"),
            )?;
            out.set_color(ColorSpec::new().set_fg(Some(color)))?;
            write!(out, "{}", status)?;
            out.reset()?;
            writeln!(out, " ({}) {}", code, result_message(code))?;
        }
    }

    let monitors = monitor_overview(events);
    if !monitors.active.is_empty() || !monitors.stopped.is_empty() {
        write_header(&mut out, "Monitor status:")?;
        out.set_color(ColorSpec::new().set_fg(Some(COLOR_GOOD)))?;
        write!(out, "  {:<26}", "active")?;
        out.reset()?;
        writeln!(out, "{}", monitors.active.join(", "))?;
        out.set_color(ColorSpec::new().set_fg(Some(COLOR_DIM)))?;
        write!(out, "  {:<26}", "stopped")?;
        out.reset()?;
        writeln!(out, "{}", monitors.stopped.join(", "))?;
    }

    let active_count = scheduled
        .iter()
        .filter(|scheduled_| !scheduled_.is_expired)
        .count() as Count;
    let expired_count = scheduled.len() as Count - active_count;
    write_header(&mut out, "Scheduled transfers:")?;
    write_count(&mut out, "active", active_count, Some(COLOR_GOOD))?;
    write_count(&mut out, "expired", expired_count, Some(COLOR_DIM))?;
    // upcoming first by timezone field, matching the dashboard ordering
    let active_overviews: Vec<ScheduledTransferOverview> = scheduled
        .iter()
        .filter(|scheduled_| !scheduled_.is_expired)
        .map(|scheduled_| scheduled_.overview())
        .sorted_by(|overview_a, overview_b| {
            overview_a
                .timezone
                .cmp(&overview_b.timezone)
        })
        .take(SUMMARY_ROWS_MAX)
        .collect();
    if !active_overviews.is_empty() {
        write_header(&mut out, "Next scheduled transfers:")?;
        for overview in active_overviews.iter() {
            write_overview_row(&mut out, overview)?;
        }
    }
    let expired_overviews: Vec<ScheduledTransferOverview> = scheduled
        .iter()
        .filter(|scheduled_| scheduled_.is_expired)
        .map(|scheduled_| scheduled_.overview())
        .sorted_by(|overview_a, overview_b| {
            overview_b
                .timezone
                .cmp(&overview_a.timezone)
        })
        .take(SUMMARY_ROWS_MAX)
        .collect();
    if !expired_overviews.is_empty() {
        write_header(&mut out, "Last expired scheduled transfers:")?;
        for overview in expired_overviews.iter() {
            write_overview_row(&mut out, overview)?;
        }
    }

    write_header(&mut out, "Entity summary:")?;
    write_names(&mut out, "monitors", &categorized.monitors)?;
    write_names(&mut out, "agents", &categorized.agents)?;
    write_names(&mut out, "source qmgrs", &categorized.source_qmgrs)?;
    write_names(&mut out, "destination qmgrs", &categorized.destination_qmgrs)?;
    write_count(&mut out, "transfer events", categorized.transfer_event_count, None)?;
    out.flush()?;

    Ok(())
}
