// src/data/scheduled.rs

//! Implements a [`ScheduledTransfer`], the derived entity reconstructed
//! from up to four related event types sharing a reference identifier.
//!
//! A `ScheduledTransfer` accumulates during a single pass over the
//! parsed [`Event`] sequence (see [`correlate_scheduled`]); it holds at
//! most one event per contributing sub-type, last write wins. It
//! materializes into output only when the initiation (`SSIN`), transfer
//! definition (`SSTR`), and transfer status (`SSTS`) slots are all
//! filled; the expiry (`SEXP`) slot is optional and only drives the
//! `is_expired` flag.
//!
//! [`Event`]: crate::data::event::Event
//! [`correlate_scheduled`]: crate::reducers::correlator::correlate_scheduled

use crate::data::event::{Event, EventAttr, EventKind};

use ::serde::Serialize;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ScheduledTransfer
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A scheduled transfer reconstructed from correlated `SSIN`, `SSTR`,
/// `SSTS`, and optionally `SEXP` events sharing one reference identifier.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScheduledTransfer {
    /// The shared correlation key.
    pub reference_id: String,
    /// Schedule-initiation sub-event.
    pub ssin: Option<Event>,
    /// Schedule-transfer-definition sub-event.
    pub sstr: Option<Event>,
    /// Schedule-transfer-status sub-event.
    pub ssts: Option<Event>,
    /// Schedule-expiry sub-event.
    pub sexp: Option<Event>,
    /// `true` iff an expiry event was ever observed for this key.
    /// Monotonic; never reset to `false`.
    pub is_expired: bool,
}

impl ScheduledTransfer {
    /// An empty accumulator for `reference_id`; all slots empty, not
    /// expired.
    pub fn new(reference_id: String) -> ScheduledTransfer {
        ScheduledTransfer {
            reference_id,
            ssin: None,
            sstr: None,
            ssts: None,
            sexp: None,
            is_expired: false,
        }
    }

    /// Store `event` into the slot matching its kind, overwriting any
    /// prior event of the same kind (last write wins). An `SEXP` event
    /// additionally sets `is_expired`, unconditionally.
    ///
    /// Events of non-contributing kinds are ignored.
    pub fn absorb(
        &mut self,
        event: Event,
    ) {
        match event.kind {
            EventKind::SSIN => self.ssin = Some(event),
            EventKind::SSTR => self.sstr = Some(event),
            EventKind::SSTS => self.ssts = Some(event),
            EventKind::SEXP => {
                self.sexp = Some(event);
                self.is_expired = true;
            }
            _ => {}
        }
    }

    /// Completeness condition for materializing into the output
    /// collection: initiation, transfer-definition, and status
    /// sub-events all present. Expiry does not gate completeness.
    pub fn is_complete(&self) -> bool {
        self.ssin.is_some() && self.sstr.is_some() && self.ssts.is_some()
    }

    /// The display-only projection consumed by the presentation layer.
    pub fn overview(&self) -> ScheduledTransferOverview {
        let sub_attr = |event_opt: &Option<Event>, attr: EventAttr| -> Option<String> {
            event_opt
                .as_ref()
                .and_then(|event| event.attr(attr))
                .map(|value| value.to_string())
        };
        ScheduledTransferOverview {
            reference_id: self.reference_id.clone(),
            scheduled_by: sub_attr(&self.ssin, EventAttr::UserId),
            agent: sub_attr(&self.ssin, EventAttr::Agent),
            timezone: sub_attr(&self.ssin, EventAttr::Timezone),
            source_agent: sub_attr(&self.sstr, EventAttr::SourceAgent),
            destination_agent: sub_attr(&self.sstr, EventAttr::DestinationAgent),
            source_file: sub_attr(&self.ssts, EventAttr::SourceFile),
            destination_file: sub_attr(&self.ssts, EventAttr::DestinationFile),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ScheduledTransferOverview
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Display-only projection of a [`ScheduledTransfer`], drawn from its
/// nested sub-events: who scheduled it, on which agent and timezone,
/// and the transfer's endpoints.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ScheduledTransferOverview {
    pub reference_id: String,
    /// `user_id` of the `SSIN` sub-event.
    pub scheduled_by: Option<String>,
    /// `agent` of the `SSIN` sub-event.
    pub agent: Option<String>,
    /// `timezone` of the `SSIN` sub-event.
    pub timezone: Option<String>,
    /// `source_agent` of the `SSTR` sub-event.
    pub source_agent: Option<String>,
    /// `destination_agent` of the `SSTR` sub-event.
    pub destination_agent: Option<String>,
    /// `source_file` of the `SSTS` sub-event.
    pub source_file: Option<String>,
    /// `destination_file` of the `SSTS` sub-event.
    pub destination_file: Option<String>,
}
