// src/data/event.rs

//! Implements an [`Event`], one parsed MFT event log line, and the
//! line parser [`parse_line`] that creates them.
//!
//! One "line" of an MFT event log is a `;`-delimited record,
//! minimally `timestamp;reference_id;typeTag;…`. The event-type tag
//! selects a fixed field schema, [`FieldInstr`] rows mapping split-field
//! indexes to named attributes. The schemas are declared per
//! [`EventKind`] in [`EventKind::schema`].
//!
//! Parsing one line yields a three-way [`ResultParseLine`]:
//! - [`Parsed`] holding an [`Event`],
//! - [`Rejected`] holding a [`RejectReason`] (a malformed line),
//! - [`Skipped`] (a well-formed line of an unsupported event type).
//!
//! [`Parsed`]: ResultParseLine::Parsed
//! [`Rejected`]: ResultParseLine::Rejected
//! [`Skipped`]: ResultParseLine::Skipped

use crate::common::{FieldIndex, FIELD_COUNT_MIN, FIELD_DELIMITER};
use crate::data::datetime::{
    datetime_from_str,
    datetime_to_iso8601,
    DateTimeM,
};

use std::collections::BTreeMap;
use std::fmt;

use ::lazy_static::lazy_static;
use ::regex::Regex;
use ::serde::ser::{Serialize, SerializeMap, Serializer};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EventKind
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The closed set of MFT event-type tags this parser understands.
///
/// Monitor lifecycle (`MACT`, `MCRT`, `MFIR`), authority checks (`AUTH`),
/// schedule lifecycle (`SDEL`, `SEXP`, `SSKP`, `SSIN`, `SSTR`, `SSTS`),
/// and transfer lifecycle (`TSTR`, `TCOM`, `TCAN`, `TDEL`, `TPRO`).
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EventKind {
    MACT,
    MCRT,
    MFIR,
    AUTH,
    SDEL,
    SEXP,
    SSKP,
    SSIN,
    SSTR,
    SSTS,
    TSTR,
    TCOM,
    TCAN,
    TDEL,
    TPRO,
}

impl EventKind {
    /// Map an event-type tag, as extracted from field index 2,
    /// to an `EventKind`. `None` for unsupported tags.
    pub fn from_tag(tag: &str) -> Option<EventKind> {
        match tag {
            "MACT" => Some(EventKind::MACT),
            "MCRT" => Some(EventKind::MCRT),
            "MFIR" => Some(EventKind::MFIR),
            "AUTH" => Some(EventKind::AUTH),
            "SDEL" => Some(EventKind::SDEL),
            "SEXP" => Some(EventKind::SEXP),
            "SSKP" => Some(EventKind::SSKP),
            "SSIN" => Some(EventKind::SSIN),
            "SSTR" => Some(EventKind::SSTR),
            "SSTS" => Some(EventKind::SSTS),
            "TSTR" => Some(EventKind::TSTR),
            "TCOM" => Some(EventKind::TCOM),
            "TCAN" => Some(EventKind::TCAN),
            "TDEL" => Some(EventKind::TDEL),
            "TPRO" => Some(EventKind::TPRO),
            _ => None,
        }
    }

    /// The tag as it appears in the log (and in serialized output
    /// under key `"type"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::MACT => "MACT",
            EventKind::MCRT => "MCRT",
            EventKind::MFIR => "MFIR",
            EventKind::AUTH => "AUTH",
            EventKind::SDEL => "SDEL",
            EventKind::SEXP => "SEXP",
            EventKind::SSKP => "SSKP",
            EventKind::SSIN => "SSIN",
            EventKind::SSTR => "SSTR",
            EventKind::SSTS => "SSTS",
            EventKind::TSTR => "TSTR",
            EventKind::TCOM => "TCOM",
            EventKind::TCAN => "TCAN",
            EventKind::TDEL => "TDEL",
            EventKind::TPRO => "TPRO",
        }
    }

    /// Monitor lifecycle events; only these contribute `monitor_name`
    /// to the categorizer's `monitors` set.
    pub const fn is_monitor(self) -> bool {
        matches!(self, EventKind::MACT | EventKind::MCRT | EventKind::MFIR)
    }

    /// Transfer lifecycle events counted by the categorizer.
    pub const fn is_transfer_lifecycle(self) -> bool {
        matches!(
            self,
            EventKind::TSTR | EventKind::TCOM | EventKind::TPRO | EventKind::TCAN | EventKind::TDEL
        )
    }

    /// Events contributing to a [`ScheduledTransfer`] correlation.
    ///
    /// [`ScheduledTransfer`]: crate::data::scheduled::ScheduledTransfer
    pub const fn is_schedule_correlated(self) -> bool {
        matches!(
            self,
            EventKind::SSIN | EventKind::SSTR | EventKind::SSTS | EventKind::SEXP
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EventAttr
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The closed set of type-specific attribute names an [`Event`] may carry.
///
/// Which attributes a particular event carries is fixed by its
/// [`EventKind::schema`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EventAttr {
    Action,
    Agent,
    Authority,
    DestinationAgent,
    DestinationFile,
    DestinationQmgr,
    DestinationType,
    ExpireCount,
    /// Correlation key under its schedule-family name; duplicates the
    /// line's `reference_id`.
    Id,
    JobName,
    MonitorName,
    MqmdUserId,
    Qmgr,
    ResultCode,
    SourceAgent,
    SourceFile,
    SourceQmgr,
    SourceQueue,
    SourceType,
    Timezone,
    /// Correlation key under its transfer-family name; duplicates the
    /// line's `reference_id`.
    TransferId,
    UserId,
}

impl EventAttr {
    /// The attribute name as serialized (snake_case string key).
    pub const fn as_str(self) -> &'static str {
        match self {
            EventAttr::Action => "action",
            EventAttr::Agent => "agent",
            EventAttr::Authority => "authority",
            EventAttr::DestinationAgent => "destination_agent",
            EventAttr::DestinationFile => "destination_file",
            EventAttr::DestinationQmgr => "destination_qmgr",
            EventAttr::DestinationType => "destination_type",
            EventAttr::ExpireCount => "expire_count",
            EventAttr::Id => "id",
            EventAttr::JobName => "job_name",
            EventAttr::MonitorName => "monitor_name",
            EventAttr::MqmdUserId => "mqmd_user_id",
            EventAttr::Qmgr => "qmgr",
            EventAttr::ResultCode => "result_code",
            EventAttr::SourceAgent => "source_agent",
            EventAttr::SourceFile => "source_file",
            EventAttr::SourceQmgr => "source_qmgr",
            EventAttr::SourceQueue => "source_queue",
            EventAttr::SourceType => "source_type",
            EventAttr::Timezone => "timezone",
            EventAttr::TransferId => "transfer_id",
            EventAttr::UserId => "user_id",
        }
    }
}

impl fmt::Display for EventAttr {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping of attribute names to values for one [`Event`].
pub type EventAttrs = BTreeMap<EventAttr, String>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// field schemas
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Where one schema attribute's value comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldSource {
    /// Verbatim copy of the split field at this index.
    Raw(FieldIndex),
    /// Whitespace-trimmed copy of the split field at this index.
    Trimmed(FieldIndex),
    /// The line's correlation key (trimmed field index 1), duplicated
    /// under a type-appropriate attribute name (`id`, `transfer_id`).
    Key,
    /// A fixed literal value (e.g. `SEXP` always carries
    /// `action="expire"`).
    Literal(&'static str),
}

/// One row of an event-type field schema: which attribute, from where.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldInstr {
    pub attr: EventAttr,
    pub source: FieldSource,
}

/// shorthand for declaring [`FieldInstr`] rows
const fn fi(
    attr: EventAttr,
    source: FieldSource,
) -> FieldInstr {
    FieldInstr { attr, source }
}

use self::EventAttr as A;
use self::FieldSource as F;

const SCHEMA_MACT: &[FieldInstr] = &[
    fi(A::MonitorName, F::Raw(4)),
    fi(A::Agent, F::Raw(5)),
    fi(A::Qmgr, F::Raw(6)),
    fi(A::Action, F::Raw(7)),
];

const SCHEMA_MCRT: &[FieldInstr] = &[
    fi(A::MonitorName, F::Raw(3)),
    fi(A::Agent, F::Raw(4)),
    fi(A::Qmgr, F::Raw(5)),
    fi(A::Action, F::Raw(6)),
];

const SCHEMA_MFIR: &[FieldInstr] = &[
    fi(A::MonitorName, F::Raw(4)),
    fi(A::Agent, F::Raw(5)),
    fi(A::Qmgr, F::Raw(6)),
    fi(A::ResultCode, F::Raw(3)),
    fi(A::Action, F::Raw(7)),
];

const SCHEMA_AUTH: &[FieldInstr] = &[
    fi(A::Id, F::Key),
    fi(A::ResultCode, F::Raw(3)),
    fi(A::Action, F::Raw(4)),
    fi(A::Authority, F::Raw(5)),
    fi(A::UserId, F::Raw(6)),
    fi(A::MqmdUserId, F::Raw(7)),
];

const SCHEMA_SDEL: &[FieldInstr] = &[
    fi(A::Id, F::Key),
    fi(A::ResultCode, F::Raw(3)),
    fi(A::Agent, F::Raw(4)),
    fi(A::Action, F::Raw(5)),
    fi(A::UserId, F::Raw(6)),
];

const SCHEMA_SEXP: &[FieldInstr] = &[
    fi(A::Id, F::Key),
    fi(A::ResultCode, F::Raw(3)),
    fi(A::Agent, F::Raw(4)),
    fi(A::Action, F::Literal("expire")),
    fi(A::UserId, F::Raw(6)),
];

const SCHEMA_SSKP: &[FieldInstr] = &[
    fi(A::Id, F::Key),
    fi(A::ResultCode, F::Raw(3)),
    fi(A::Agent, F::Raw(4)),
    fi(A::Action, F::Raw(5)),
    fi(A::UserId, F::Raw(6)),
];

const SCHEMA_SSIN: &[FieldInstr] = &[
    fi(A::Id, F::Key),
    fi(A::ResultCode, F::Raw(3)),
    fi(A::Agent, F::Raw(4)),
    fi(A::Action, F::Raw(5)),
    fi(A::UserId, F::Raw(6)),
    fi(A::Timezone, F::Raw(8)),
    fi(A::ExpireCount, F::Raw(9)),
];

const SCHEMA_SSTR: &[FieldInstr] = &[
    fi(A::Id, F::Key),
    fi(A::SourceAgent, F::Raw(3)),
    fi(A::SourceQmgr, F::Raw(4)),
    fi(A::DestinationAgent, F::Raw(5)),
    fi(A::DestinationQmgr, F::Raw(6)),
];

const SCHEMA_SSTS: &[FieldInstr] = &[
    fi(A::Id, F::Key),
    fi(A::SourceFile, F::Trimmed(3)),
    fi(A::SourceQueue, F::Trimmed(4)),
    fi(A::DestinationFile, F::Trimmed(6)),
    fi(A::DestinationType, F::Trimmed(7)),
];

const SCHEMA_TSTR: &[FieldInstr] = &[
    fi(A::TransferId, F::Key),
    fi(A::SourceAgent, F::Raw(4)),
    fi(A::SourceQmgr, F::Raw(5)),
    fi(A::DestinationAgent, F::Raw(7)),
    fi(A::DestinationQmgr, F::Raw(8)),
    fi(A::UserId, F::Raw(9)),
    fi(A::JobName, F::Raw(10)),
];

const SCHEMA_TCOM: &[FieldInstr] = &[
    fi(A::TransferId, F::Key),
    fi(A::ResultCode, F::Raw(3)),
    fi(A::SourceAgent, F::Raw(4)),
    fi(A::SourceQmgr, F::Raw(5)),
    fi(A::DestinationAgent, F::Raw(7)),
    fi(A::DestinationQmgr, F::Raw(8)),
    fi(A::UserId, F::Raw(10)),
];

// TCAN and TDEL share the TCOM field layout.
const SCHEMA_TCAN_TDEL: &[FieldInstr] = SCHEMA_TCOM;

const SCHEMA_TPRO: &[FieldInstr] = &[
    fi(A::TransferId, F::Key),
    fi(A::SourceFile, F::Raw(4)),
    fi(A::SourceType, F::Raw(6)),
    fi(A::DestinationFile, F::Raw(13)),
    fi(A::DestinationType, F::Raw(15)),
    fi(A::ResultCode, F::Raw(3)),
];

/// `SSTS` lines may legitimately omit trailing fields; the split fields
/// are padded with empty strings up to this count before indexing.
pub const SSTS_FIELD_COUNT_PAD: usize = 11;

impl EventKind {
    /// The field schema for this event type: the fixed set of
    /// (attribute ← field source) rows consumed from the split fields.
    pub const fn schema(self) -> &'static [FieldInstr] {
        match self {
            EventKind::MACT => SCHEMA_MACT,
            EventKind::MCRT => SCHEMA_MCRT,
            EventKind::MFIR => SCHEMA_MFIR,
            EventKind::AUTH => SCHEMA_AUTH,
            EventKind::SDEL => SCHEMA_SDEL,
            EventKind::SEXP => SCHEMA_SEXP,
            EventKind::SSKP => SCHEMA_SSKP,
            EventKind::SSIN => SCHEMA_SSIN,
            EventKind::SSTR => SCHEMA_SSTR,
            EventKind::SSTS => SCHEMA_SSTS,
            EventKind::TSTR => SCHEMA_TSTR,
            EventKind::TCOM => SCHEMA_TCOM,
            EventKind::TCAN => SCHEMA_TCAN_TDEL,
            EventKind::TDEL => SCHEMA_TCAN_TDEL,
            EventKind::TPRO => SCHEMA_TPRO,
        }
    }

    /// Count of split fields to pad up to (with empty strings) before
    /// applying the schema. Zero means no padding; a referenced index
    /// beyond the split fields rejects the line.
    pub(crate) const fn pad_fields_to(self) -> usize {
        match self {
            EventKind::SSTS => SSTS_FIELD_COUNT_PAD,
            _ => 0,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Event
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One parsed MFT event log line.
///
/// Always carries a datetime stamp, a (possibly empty) reference
/// identifier, and an [`EventKind`]; the attributes are exactly those of
/// the kind's [`schema`] — a line missing any required field is rejected
/// whole, never partially parsed.
///
/// [`schema`]: EventKind::schema
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Parsed datetime stamp from field index 0.
    pub dt: DateTimeM,
    /// Trimmed correlation key from field index 1.
    pub reference_id: String,
    /// The event-type tag from field index 2.
    pub kind: EventKind,
    /// Type-specific attributes per [`EventKind::schema`].
    pub attrs: EventAttrs,
}

impl Event {
    /// The attribute value, if this event's schema carries it.
    pub fn attr(
        &self,
        attr: EventAttr,
    ) -> Option<&str> {
        self.attrs
            .get(&attr)
            .map(|value| value.as_str())
    }

    /// The key used to group related events: the `reference_id`,
    /// falling back to the `id` attribute (the same value under its
    /// type-specific name) should the reference field be empty.
    /// `None` when both are empty.
    pub fn correlation_key(&self) -> Option<&str> {
        if !self.reference_id.is_empty() {
            return Some(self.reference_id.as_str());
        }
        self.attr(EventAttr::Id)
            .filter(|id| !id.is_empty())
    }

    /// The datetime stamp as a canonical ISO-8601 string.
    pub fn timestamp_iso8601(&self) -> String {
        datetime_to_iso8601(&self.dt)
    }
}

impl Serialize for Event {
    /// Serialize as a flat string-keyed map: `timestamp` (ISO-8601),
    /// `reference_id`, `type`, then the type-specific attributes in
    /// schema order.
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let schema = self.kind.schema();
        let mut map = serializer.serialize_map(Some(3 + schema.len()))?;
        map.serialize_entry("timestamp", &self.timestamp_iso8601())?;
        map.serialize_entry("reference_id", &self.reference_id)?;
        map.serialize_entry("type", self.kind.as_str())?;
        for instr in schema.iter() {
            // every schema attribute is present on a successfully
            // parsed event
            if let Some(value) = self.attrs.get(&instr.attr) {
                map.serialize_entry(instr.attr.as_str(), value)?;
            }
        }
        map.end()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parse_line
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Why a line was rejected as malformed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RejectReason {
    /// Fewer than [`FIELD_COUNT_MIN`] `;`-split fields.
    ///
    /// [`FIELD_COUNT_MIN`]: crate::common::FIELD_COUNT_MIN
    TooFewFields(usize),
    /// Field index 0 did not parse with [`DATETIME_FORMAT`].
    ///
    /// [`DATETIME_FORMAT`]: crate::data::datetime::DATETIME_FORMAT
    BadTimestamp(String),
    /// The event type's schema referenced a field index beyond the
    /// split fields.
    FieldIndexOutOfRange {
        kind: EventKind,
        attr: EventAttr,
        index: FieldIndex,
        have: usize,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            RejectReason::TooFewFields(count) => {
                write!(f, "too few fields ({})", count)
            }
            RejectReason::BadTimestamp(data) => {
                write!(f, "bad timestamp {:?}", data)
            }
            RejectReason::FieldIndexOutOfRange {
                kind,
                attr,
                index,
                have,
            } => {
                write!(
                    f,
                    "field index {} out of range for type {} attribute {} ({} fields)",
                    index, kind, attr, have,
                )
            }
        }
    }
}

/// Three-way outcome of parsing one log line.
///
/// Distinguishes a malformed line (`Rejected`, reported) from a
/// well-formed line of an unsupported event type (`Skipped`, silently
/// dropped). Similar in spirit to [`Result`] but with the extra
/// non-error "nothing to return" state.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultParseLine {
    /// The line parsed into an [`Event`].
    Parsed(Event),
    /// The line is malformed; carries the reason.
    Rejected(RejectReason),
    /// The line is well-formed but its event-type tag is not in the
    /// schema table.
    Skipped,
}

impl ResultParseLine {
    /// Returns `true` if the result is [`Parsed`].
    ///
    /// [`Parsed`]: ResultParseLine::Parsed
    #[inline(always)]
    pub const fn is_parsed(&self) -> bool {
        matches!(*self, ResultParseLine::Parsed(_))
    }

    /// Returns `true` if the result is [`Rejected`].
    ///
    /// [`Rejected`]: ResultParseLine::Rejected
    #[inline(always)]
    pub const fn is_rejected(&self) -> bool {
        matches!(*self, ResultParseLine::Rejected(_))
    }

    /// Returns `true` if the result is [`Skipped`].
    ///
    /// [`Skipped`]: ResultParseLine::Skipped
    #[inline(always)]
    pub const fn is_skipped(&self) -> bool {
        matches!(*self, ResultParseLine::Skipped)
    }

    /// Converts to [`Option<Event>`], consuming `self` and discarding
    /// any rejection reason.
    #[inline(always)]
    pub fn parsed(self) -> Option<Event> {
        match self {
            ResultParseLine::Parsed(event) => Some(event),
            ResultParseLine::Rejected(_) => None,
            ResultParseLine::Skipped => None,
        }
    }
}

lazy_static! {
    /// Matches a bracketed uppercase event-type tag at the start of
    /// field index 2, e.g. ` [TCOM]`; capture group 1 is the inner tag.
    static ref EVENT_TAG_REGEX: Regex = Regex::new(r"^\s*\[([A-Z]+)\]").unwrap();
}

/// Extract the event-type tag from field index 2.
///
/// A bracketed uppercase token yields the inner token. Otherwise the
/// trimmed field is taken verbatim, stripping one leading/trailing
/// bracket pair if present.
fn extract_tag(field: &str) -> String {
    if let Some(captures) = EVENT_TAG_REGEX.captures(field) {
        return captures[1].to_string();
    }
    let tag = field.trim();
    match tag.strip_prefix('[').and_then(|tag_| tag_.strip_suffix(']')) {
        Some(inner) => inner.trim().to_string(),
        None => tag.to_string(),
    }
}

/// Parse one raw MFT event log line into an [`Event`].
///
/// Processing:
/// 1. trim, split on `';'`; fewer than 4 fields rejects the line
/// 2. extract the event-type tag from field index 2
/// 3. parse field index 0 as the datetime stamp; failure rejects the line
/// 4. take the trimmed field index 1 as `reference_id`
/// 5. dispatch on the tag to its field schema; any referenced index
///    beyond the split fields rejects the whole line (`SSTS` pads
///    instead, see [`SSTS_FIELD_COUNT_PAD`])
///
/// Unsupported tags return [`ResultParseLine::Skipped`], never an error.
pub fn parse_line(raw: &str) -> ResultParseLine {
    let line = raw.trim();
    let mut fields: Vec<&str> = line
        .split(FIELD_DELIMITER)
        .collect();
    if fields.len() < FIELD_COUNT_MIN {
        return ResultParseLine::Rejected(RejectReason::TooFewFields(fields.len()));
    }

    let tag = extract_tag(fields[2]);

    let dt: DateTimeM = match datetime_from_str(fields[0]) {
        Some(dt) => dt,
        None => {
            return ResultParseLine::Rejected(RejectReason::BadTimestamp(fields[0].to_string()));
        }
    };

    let reference_id = fields[1].trim().to_string();

    let kind: EventKind = match EventKind::from_tag(tag.as_str()) {
        Some(kind) => kind,
        None => return ResultParseLine::Skipped,
    };

    while fields.len() < kind.pad_fields_to() {
        fields.push("");
    }

    let mut attrs = EventAttrs::new();
    for instr in kind.schema().iter() {
        let value: String = match instr.source {
            FieldSource::Raw(index) => match fields.get(index) {
                Some(field) => (*field).to_string(),
                None => {
                    return ResultParseLine::Rejected(RejectReason::FieldIndexOutOfRange {
                        kind,
                        attr: instr.attr,
                        index,
                        have: fields.len(),
                    });
                }
            },
            FieldSource::Trimmed(index) => match fields.get(index) {
                Some(field) => field.trim().to_string(),
                None => {
                    return ResultParseLine::Rejected(RejectReason::FieldIndexOutOfRange {
                        kind,
                        attr: instr.attr,
                        index,
                        have: fields.len(),
                    });
                }
            },
            FieldSource::Key => reference_id.clone(),
            FieldSource::Literal(literal) => literal.to_string(),
        };
        attrs.insert(instr.attr, value);
    }

    ResultParseLine::Parsed(Event {
        dt,
        reference_id,
        kind,
        attrs,
    })
}
