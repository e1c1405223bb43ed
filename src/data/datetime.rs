// src/data/datetime.rs

//! Parse the fixed-format datetime stamp leading every MFT event log line
//! and render it back as a canonical ISO-8601 string.
//!
//! The most relevant documents to understand this file are:
//! - `chrono` crate [`strftime`] format.
//!
//! [`strftime`]: https://docs.rs/chrono/0.4.21/chrono/format/strftime/index.html

#[doc(hidden)]
pub use ::chrono::NaiveDateTime;

/// A datetime stamp of one MFT log line. `M`FT specialized [`NaiveDateTime`].
///
/// MFT event logs do not carry a timezone offset; the naive datetime is
/// carried through unchanged.
///
/// [`NaiveDateTime`]: https://docs.rs/chrono/0.4.21/chrono/naive/struct.NaiveDateTime.html
pub type DateTimeM = NaiveDateTime;
pub type DateTimeMOpt = Option<DateTimeM>;

/// The one datetime stamp format written by the MFT subsystem,
/// e.g. `2025-01-01T10:00:00`. A chrono [`strftime`] pattern.
///
/// [`strftime`]: https://docs.rs/chrono/0.4.21/chrono/format/strftime/index.html
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Transform `data` to a [`DateTimeM`] using [`DATETIME_FORMAT`].
/// `None` if `data` does not match the format.
pub fn datetime_from_str(data: &str) -> DateTimeMOpt {
    NaiveDateTime::parse_from_str(data, DATETIME_FORMAT).ok()
}

/// Render `dt` as a canonical ISO-8601 string, the same form accepted
/// by [`datetime_from_str`].
pub fn datetime_to_iso8601(dt: &DateTimeM) -> String {
    dt.format(DATETIME_FORMAT)
        .to_string()
}
