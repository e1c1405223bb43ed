// src/reducers/correlator.rs

//! Implements the scheduled-transfer correlator, reducing a parsed
//! [`Event`] sequence into completed [`ScheduledTransfer`] entities.
//!
//! The correlation is a single pass over the events in original order,
//! folding the four schedule-correlated kinds (`SSIN`, `SSTR`, `SSTS`,
//! `SEXP`) into per-key accumulators. A key's accumulator has no
//! identity before its first contributing event and is emitted only at
//! the end of the full pass — a late-arriving expiry event can still
//! flip `is_expired` on an already-complete entity.
//!
//! [`Event`]: crate::data::event::Event
//! [`ScheduledTransfer`]: crate::data::scheduled::ScheduledTransfer

use crate::data::scheduled::ScheduledTransfer;
use crate::data::event::Event;

use std::collections::HashMap;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// correlate_scheduled
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Reduce `events` into the completed [`ScheduledTransfer`]s.
///
/// For each schedule-correlated event with a non-empty correlation key,
/// look up or create the key's accumulator and store the event into the
/// slot matching its kind (last write wins; `SEXP` also sets
/// `is_expired`, monotonically). After the full pass, emit one
/// `ScheduledTransfer` per key whose `SSIN`, `SSTR`, and `SSTS` slots
/// are all filled, in first-seen key order.
///
/// An accumulator that never completes — e.g. an expiry with no
/// matching initiation — is dropped from the output silently.
pub fn correlate_scheduled(events: &[Event]) -> Vec<ScheduledTransfer> {
    defn!("({} events)", events.len());
    let mut accumulators: HashMap<String, ScheduledTransfer> = HashMap::new();
    // HashMap iteration order is arbitrary; keep first-seen key order
    // for deterministic emission
    let mut key_order: Vec<String> = Vec::new();

    for event in events.iter() {
        if !event.kind.is_schedule_correlated() {
            continue;
        }
        let key: String = match event.correlation_key() {
            Some(key) => key.to_string(),
            None => continue,
        };
        let accumulator = accumulators
            .entry(key.clone())
            .or_insert_with(|| {
                key_order.push(key.clone());

                ScheduledTransfer::new(key)
            });
        accumulator.absorb(event.clone());
    }

    let mut scheduled: Vec<ScheduledTransfer> = Vec::with_capacity(key_order.len());
    for key in key_order.iter() {
        if let Some(accumulator) = accumulators.remove(key) {
            if accumulator.is_complete() {
                scheduled.push(accumulator);
            }
        }
    }
    defx!("{} completed of {} keys", scheduled.len(), key_order.len());

    scheduled
}
