// src/reducers/categorizer.rs

//! Implements the entity categorizer, reducing a parsed [`Event`]
//! sequence into a [`CategorizedSummary`] of the distinct entities
//! the log mentions.
//!
//! [`Event`]: crate::data::event::Event

use crate::common::Count;
use crate::data::event::{Event, EventAttr};

use std::collections::BTreeSet;

use ::serde::Serialize;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CategorizedSummary
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Distinct entities found in an [`Event`] sequence. Name sequences are
/// deduplicated, lexicographically sorted, case-sensitive.
///
/// [`Event`]: crate::data::event::Event
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CategorizedSummary {
    /// Distinct monitor names of monitor-lifecycle events
    /// (`MACT`, `MCRT`, `MFIR`).
    pub monitors: Vec<String>,
    /// Distinct agent names, from `agent`, `source_agent`, and
    /// `destination_agent` attributes of any event carrying them.
    pub agents: Vec<String>,
    /// Distinct source queue-manager names.
    pub source_qmgrs: Vec<String>,
    /// Distinct destination queue-manager names.
    pub destination_qmgrs: Vec<String>,
    /// Count of transfer-lifecycle events
    /// (`TSTR`, `TCOM`, `TPRO`, `TCAN`, `TDEL`).
    pub transfer_event_count: Count,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// categorize_events
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Reduce `events` into a [`CategorizedSummary`] in a single pass.
///
/// The output is deterministic and independent of input order
/// (the sets are emitted sorted).
pub fn categorize_events(events: &[Event]) -> CategorizedSummary {
    defn!("({} events)", events.len());
    let mut monitors: BTreeSet<&str> = BTreeSet::new();
    let mut agents: BTreeSet<&str> = BTreeSet::new();
    let mut source_qmgrs: BTreeSet<&str> = BTreeSet::new();
    let mut destination_qmgrs: BTreeSet<&str> = BTreeSet::new();
    let mut transfer_event_count: Count = 0;

    for event in events.iter() {
        if event.kind.is_monitor() {
            if let Some(monitor_name) = event.attr(EventAttr::MonitorName) {
                monitors.insert(monitor_name);
            }
        }
        for attr in [
            EventAttr::Agent,
            EventAttr::SourceAgent,
            EventAttr::DestinationAgent,
        ] {
            if let Some(agent) = event.attr(attr) {
                agents.insert(agent);
            }
        }
        if let Some(source_qmgr) = event.attr(EventAttr::SourceQmgr) {
            source_qmgrs.insert(source_qmgr);
        }
        if let Some(destination_qmgr) = event.attr(EventAttr::DestinationQmgr) {
            destination_qmgrs.insert(destination_qmgr);
        }
        if event.kind.is_transfer_lifecycle() {
            transfer_event_count += 1;
        }
    }

    let to_sorted_vec = |set: BTreeSet<&str>| -> Vec<String> {
        // a BTreeSet iterates in lexicographic order
        set.into_iter()
            .map(String::from)
            .collect()
    };
    defx!("transfer_event_count {}", transfer_event_count);

    CategorizedSummary {
        monitors: to_sorted_vec(monitors),
        agents: to_sorted_vec(agents),
        source_qmgrs: to_sorted_vec(source_qmgrs),
        destination_qmgrs: to_sorted_vec(destination_qmgrs),
        transfer_event_count,
    }
}
