// src/reducers/mod.rs

//! Overview of the reducers:
//!
//! The reducers fold a parsed [`Event`] sequence into the derived
//! collections consumed by the export sinks and the summary printer:
//!
//! * [`categorize_events`] reduces the sequence into sorted sets of
//!   distinct monitor, agent, and queue-manager names, and a count of
//!   transfer-lifecycle events.
//! * [`correlate_scheduled`] reduces the sequence into completed
//!   [`ScheduledTransfer`] entities by grouping four event kinds under
//!   a shared reference identifier.
//!
//! Both are single-pass folds over the events in original order, with
//! all state local to the call; derived collections are values owned by
//! the caller.
//!
//! [`Event`]: crate::data::event::Event
//! [`categorize_events`]: crate::reducers::categorizer::categorize_events
//! [`correlate_scheduled`]: crate::reducers::correlator::correlate_scheduled
//! [`ScheduledTransfer`]: crate::data::scheduled::ScheduledTransfer

pub mod categorizer;
pub mod correlator;
