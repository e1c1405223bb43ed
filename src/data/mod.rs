// src/data/mod.rs

//! The `data` module is specialized data containers for MFT log data:
//! [`Event`]s, [`ScheduledTransfer`]s, and the result-code catalog.
//!
//! ## Definitions of data
//!
//! ### Event
//!
//! An `Event` is one parsed MFT event log line that:
//!
//! * begins with a datetime stamp field, a reference identifier field, and
//!   an event-type tag field, delimited by `';'`.
//! * carries further type-specific fields described by that event type's
//!   field schema.
//!
//! An `Event` is represented by an [`Event`] and found by a [`LogReader`].
//!
//! ### ScheduledTransfer
//!
//! A `ScheduledTransfer` is a derived entity reconstructed from up to four
//! related event types (`SSIN`, `SSTR`, `SSTS`, `SEXP`) sharing a reference
//! identifier. It is assembled by [`correlate_scheduled`].
//!
//! [`Event`]: crate::data::event::Event
//! [`ScheduledTransfer`]: crate::data::scheduled::ScheduledTransfer
//! [`LogReader`]: crate::readers::logreader::LogReader
//! [`correlate_scheduled`]: crate::reducers::correlator::correlate_scheduled

pub mod datetime;
pub mod event;
pub mod resultcode;
pub mod scheduled;
