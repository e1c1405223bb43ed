// src/tests/event_tests.rs

#![allow(non_snake_case)]

use crate::data::event::{
    parse_line,
    Event,
    EventAttr,
    EventKind,
    RejectReason,
    ResultParseLine,
};
use crate::tests::common::{
    parse_line_ok,
    LINE_AUTH,
    LINE_MACT_START,
    LINE_MCRT,
    LINE_MFIR,
    LINE_SEXP,
    LINE_SSIN,
    LINE_SSTR,
    LINE_SSTS,
    LINE_TCOM,
    LINE_TPRO,
    LINE_TSTR,
};

use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EventKind
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case("MACT", Some(EventKind::MACT))]
#[test_case("SSIN", Some(EventKind::SSIN))]
#[test_case("TPRO", Some(EventKind::TPRO))]
#[test_case("XXXX", None)]
#[test_case("mact", None; "case sensitive")]
#[test_case("", None; "empty")]
fn test_EventKind_from_tag(
    tag: &str,
    expect: Option<EventKind>,
) {
    assert_eq!(EventKind::from_tag(tag), expect);
}

#[test]
fn test_EventKind_as_str_roundtrip() {
    for kind in [
        EventKind::MACT,
        EventKind::MCRT,
        EventKind::MFIR,
        EventKind::AUTH,
        EventKind::SDEL,
        EventKind::SEXP,
        EventKind::SSKP,
        EventKind::SSIN,
        EventKind::SSTR,
        EventKind::SSTS,
        EventKind::TSTR,
        EventKind::TCOM,
        EventKind::TCAN,
        EventKind::TDEL,
        EventKind::TPRO,
    ] {
        assert_eq!(EventKind::from_tag(kind.as_str()), Some(kind));
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parse_line, well-formed lines
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// any valid `MACT` line with at least 8 fields parses with
/// `monitor_name`, `agent`, `qmgr`, `action` from fields 4–7 verbatim
#[test]
fn test_parse_line_MACT() {
    let event: Event = parse_line_ok(LINE_MACT_START);
    assert_eq!(event.kind, EventKind::MACT);
    assert_eq!(event.reference_id, "REFM1");
    assert_eq!(event.timestamp_iso8601(), "2025-01-01T09:00:00");
    assert_eq!(event.attr(EventAttr::MonitorName), Some("MONITOR1"));
    assert_eq!(event.attr(EventAttr::Agent), Some("AGENT1"));
    assert_eq!(event.attr(EventAttr::Qmgr), Some("QM1"));
    assert_eq!(event.attr(EventAttr::Action), Some("start"));
    // MACT has no correlation-key alias attribute
    assert_eq!(event.attr(EventAttr::Id), None);
}

/// `MCRT` reads one field earlier than `MACT`
#[test]
fn test_parse_line_MCRT() {
    let event: Event = parse_line_ok(LINE_MCRT);
    assert_eq!(event.kind, EventKind::MCRT);
    assert_eq!(event.attr(EventAttr::MonitorName), Some("MONITOR1"));
    assert_eq!(event.attr(EventAttr::Agent), Some("AGENT1"));
    assert_eq!(event.attr(EventAttr::Qmgr), Some("QM1"));
    assert_eq!(event.attr(EventAttr::Action), Some("create"));
}

#[test]
fn test_parse_line_MFIR() {
    let event: Event = parse_line_ok(LINE_MFIR);
    assert_eq!(event.kind, EventKind::MFIR);
    assert_eq!(event.attr(EventAttr::MonitorName), Some("MONITOR1"));
    assert_eq!(event.attr(EventAttr::ResultCode), Some("0"));
    assert_eq!(event.attr(EventAttr::Action), Some("fire"));
}

#[test]
fn test_parse_line_AUTH() {
    let event: Event = parse_line_ok(LINE_AUTH);
    assert_eq!(event.kind, EventKind::AUTH);
    assert_eq!(event.attr(EventAttr::Id), Some("REFA1"));
    assert_eq!(event.attr(EventAttr::ResultCode), Some("0"));
    assert_eq!(event.attr(EventAttr::Action), Some("transfer"));
    assert_eq!(event.attr(EventAttr::Authority), Some("ADMINISTRATOR"));
    assert_eq!(event.attr(EventAttr::UserId), Some("user1"));
    assert_eq!(event.attr(EventAttr::MqmdUserId), Some("mquser1"));
}

#[test]
fn test_parse_line_SSIN() {
    let event: Event = parse_line_ok(LINE_SSIN);
    assert_eq!(event.kind, EventKind::SSIN);
    assert_eq!(event.reference_id, "REFS1");
    assert_eq!(event.attr(EventAttr::Id), Some("REFS1"));
    assert_eq!(event.attr(EventAttr::Agent), Some("AGENT1"));
    assert_eq!(event.attr(EventAttr::Action), Some("schedule"));
    assert_eq!(event.attr(EventAttr::UserId), Some("scheduser"));
    assert_eq!(event.attr(EventAttr::Timezone), Some("Europe/London"));
    assert_eq!(event.attr(EventAttr::ExpireCount), Some("1"));
}

#[test]
fn test_parse_line_SSTR() {
    let event: Event = parse_line_ok(LINE_SSTR);
    assert_eq!(event.kind, EventKind::SSTR);
    assert_eq!(event.attr(EventAttr::SourceAgent), Some("AGENT1"));
    assert_eq!(event.attr(EventAttr::SourceQmgr), Some("QM1"));
    assert_eq!(event.attr(EventAttr::DestinationAgent), Some("AGENT2"));
    assert_eq!(event.attr(EventAttr::DestinationQmgr), Some("QM2"));
}

#[test]
fn test_parse_line_SSTS() {
    let event: Event = parse_line_ok(LINE_SSTS);
    assert_eq!(event.kind, EventKind::SSTS);
    assert_eq!(event.attr(EventAttr::SourceFile), Some("/in/report.csv"));
    assert_eq!(event.attr(EventAttr::SourceQueue), Some("SRC.QUEUE"));
    assert_eq!(event.attr(EventAttr::DestinationFile), Some("/out/report.csv"));
    assert_eq!(event.attr(EventAttr::DestinationType), Some("file"));
}

/// `SEXP` always carries the literal action `"expire"`
#[test]
fn test_parse_line_SEXP_literal_action() {
    let event: Event = parse_line_ok(LINE_SEXP);
    assert_eq!(event.kind, EventKind::SEXP);
    assert_eq!(event.attr(EventAttr::Action), Some("expire"));
    assert_eq!(event.attr(EventAttr::UserId), Some("scheduser"));
}

#[test]
fn test_parse_line_TSTR() {
    let event: Event = parse_line_ok(LINE_TSTR);
    assert_eq!(event.kind, EventKind::TSTR);
    assert_eq!(event.attr(EventAttr::TransferId), Some("414d5120514d31"));
    assert_eq!(event.attr(EventAttr::SourceAgent), Some("AGENT1"));
    assert_eq!(event.attr(EventAttr::SourceQmgr), Some("QM1"));
    assert_eq!(event.attr(EventAttr::DestinationAgent), Some("AGENT2"));
    assert_eq!(event.attr(EventAttr::DestinationQmgr), Some("QM2"));
    assert_eq!(event.attr(EventAttr::UserId), Some("user1"));
    assert_eq!(event.attr(EventAttr::JobName), Some("JOB1"));
}

#[test]
fn test_parse_line_TCOM_example() {
    let event: Event = parse_line_ok(LINE_TCOM);
    assert_eq!(event.kind, EventKind::TCOM);
    assert_eq!(event.reference_id, "REF3");
    assert_eq!(event.attr(EventAttr::TransferId), Some("REF3"));
    assert_eq!(event.attr(EventAttr::ResultCode), Some("0"));
    assert_eq!(event.attr(EventAttr::SourceAgent), Some("AGT1"));
    assert_eq!(event.attr(EventAttr::SourceQmgr), Some("QM1"));
    assert_eq!(event.attr(EventAttr::DestinationAgent), Some("AGT2"));
    assert_eq!(event.attr(EventAttr::DestinationQmgr), Some("QM2"));
    assert_eq!(event.attr(EventAttr::UserId), Some("USER1"));
}

#[test]
fn test_parse_line_TPRO() {
    let event: Event = parse_line_ok(LINE_TPRO);
    assert_eq!(event.kind, EventKind::TPRO);
    assert_eq!(event.attr(EventAttr::SourceFile), Some("/in/data.dat"));
    assert_eq!(event.attr(EventAttr::SourceType), Some("file"));
    assert_eq!(event.attr(EventAttr::DestinationFile), Some("/out/data.dat"));
    assert_eq!(event.attr(EventAttr::DestinationType), Some("file"));
    assert_eq!(event.attr(EventAttr::ResultCode), Some("0"));
}

/// `TCAN` and `TDEL` share the `TCOM` field layout
#[test_case("TCAN", EventKind::TCAN)]
#[test_case("TDEL", EventKind::TDEL)]
fn test_parse_line_TCAN_TDEL(
    tag: &str,
    kind: EventKind,
) {
    let raw = format!("2025-01-01T11:30:00;TID9;[{}];41;AGENT1;QM1;;AGENT2;QM2;;user2", tag);
    let event: Event = parse_line_ok(raw.as_str());
    assert_eq!(event.kind, kind);
    assert_eq!(event.attr(EventAttr::TransferId), Some("TID9"));
    assert_eq!(event.attr(EventAttr::ResultCode), Some("41"));
    assert_eq!(event.attr(EventAttr::UserId), Some("user2"));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parse_line, event-type tag extraction
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// an unbracketed tag is taken verbatim
#[test]
fn test_parse_line_tag_unbracketed() {
    let event: Event =
        parse_line_ok("2025-01-01T10:00:00;REF3;TCOM;0;AGT1;QM1;;AGT2;QM2;;USER1");
    assert_eq!(event.kind, EventKind::TCOM);
}

/// whitespace before the bracketed tag is tolerated
#[test]
fn test_parse_line_tag_leading_whitespace() {
    let event: Event =
        parse_line_ok("2025-01-01T10:00:00;REF3;  [TCOM];0;AGT1;QM1;;AGT2;QM2;;USER1");
    assert_eq!(event.kind, EventKind::TCOM);
}

/// a bracket pair that the uppercase-token pattern does not match is
/// still stripped, and the inner token trimmed
#[test]
fn test_parse_line_tag_bracket_pair_stripped() {
    let event: Event =
        parse_line_ok("2025-01-01T10:00:00;REF3;[TCOM ];0;AGT1;QM1;;AGT2;QM2;;USER1");
    assert_eq!(event.kind, EventKind::TCOM);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parse_line, rejections and skips
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// any line with fewer than 4 fields is rejected, never a panic
#[test_case(""; "empty")]
#[test_case("no delimiters at all"; "one field")]
#[test_case("2025-01-01T10:00:00;REF1"; "two fields")]
#[test_case("2025-01-01T10:00:00;REF1;[MACT]"; "three fields")]
fn test_parse_line_too_few_fields(raw: &str) {
    match parse_line(raw) {
        ResultParseLine::Rejected(RejectReason::TooFewFields(_)) => {}
        result => panic!("parse_line({:?}) returned {:?}", raw, result),
    }
}

#[test_case("2025-01-01;REF1;[MACT];0;M1;A1;Q1;start"; "date only")]
#[test_case("yesterday;REF1;[MACT];0;M1;A1;Q1;start"; "garbage")]
#[test_case(";REF1;[MACT];0;M1;A1;Q1;start"; "empty timestamp")]
fn test_parse_line_bad_timestamp(raw: &str) {
    match parse_line(raw) {
        ResultParseLine::Rejected(RejectReason::BadTimestamp(_)) => {}
        result => panic!("parse_line({:?}) returned {:?}", raw, result),
    }
}

/// a bad timestamp on an unsupported type still rejects on the
/// timestamp; the type dispatch happens after the datetime parse
#[test]
fn test_parse_line_bad_timestamp_unsupported_type() {
    let raw = "nonsense;REF1;[ZZZZ];a;b";
    match parse_line(raw) {
        ResultParseLine::Rejected(RejectReason::BadTimestamp(_)) => {}
        result => panic!("parse_line({:?}) returned {:?}", raw, result),
    }
}

/// a supported type missing a schema-referenced trailing field is
/// rejected whole; no partial `Event`
#[test_case("2025-01-01T09:00:00;REFM1;[MACT];0;MONITOR1;AGENT1;QM1"; "MACT 7 fields")]
#[test_case("2025-01-01T10:00:00;REF3;[TCOM];0;AGT1;QM1;;AGT2;QM2"; "TCOM 9 fields")]
#[test_case("2025-01-01T10:00:00;TID1;[TSTR];0;AGT1;QM1;;AGT2;QM2;user1"; "TSTR 10 fields")]
#[test_case("2025-01-01T10:00:00;TID1;[TPRO];0;/in;;file;;;;;;;/out;"; "TPRO 15 fields")]
#[test_case("2025-01-02T08:00:00;REFS1;[SSIN];0;AGENT1;schedule;scheduser;;UTC"; "SSIN 9 fields")]
fn test_parse_line_field_index_out_of_range(raw: &str) {
    match parse_line(raw) {
        ResultParseLine::Rejected(RejectReason::FieldIndexOutOfRange { .. }) => {}
        result => panic!("parse_line({:?}) returned {:?}", raw, result),
    }
}

/// `SSTS` lines with missing trailing fields are padded, never rejected
#[test]
fn test_parse_line_SSTS_short_line_pads() {
    let event: Event = parse_line_ok("2025-01-02T08:00:02;REFS1;[SSTS];/in/report.csv");
    assert_eq!(event.attr(EventAttr::SourceFile), Some("/in/report.csv"));
    assert_eq!(event.attr(EventAttr::SourceQueue), Some(""));
    assert_eq!(event.attr(EventAttr::DestinationFile), Some(""));
    assert_eq!(event.attr(EventAttr::DestinationType), Some(""));
}

/// unsupported event types are skipped, distinguishable from rejection
#[test_case("2025-01-01T10:00:00;REF1;[ZZZZ];whatever"; "bracketed unknown")]
#[test_case("2025-01-01T10:00:00;REF1;HELLO;whatever"; "unbracketed unknown")]
#[test_case("2025-01-01T10:00:00;REF1;[tcom];whatever"; "lowercase tag")]
fn test_parse_line_unsupported_type_skipped(raw: &str) {
    assert_eq!(parse_line(raw), ResultParseLine::Skipped);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Event
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_Event_correlation_key_prefers_reference_id() {
    let event: Event = parse_line_ok(LINE_SSIN);
    assert_eq!(event.correlation_key(), Some("REFS1"));
}

/// the `id` attribute duplicates `reference_id`; with the reference
/// field blank both are empty and there is no key
#[test]
fn test_Event_correlation_key_empty() {
    let event: Event =
        parse_line_ok("2025-01-02T08:00:00;;[SSIN];0;AGENT1;schedule;scheduser;;UTC;1");
    assert_eq!(event.reference_id, "");
    assert_eq!(event.attr(EventAttr::Id), Some(""));
    assert_eq!(event.correlation_key(), None);
}

#[test]
fn test_ResultParseLine_predicates() {
    assert!(parse_line(LINE_TCOM).is_parsed());
    assert!(parse_line("x;y").is_rejected());
    assert!(parse_line("2025-01-01T10:00:00;R;[QQQQ];x").is_skipped());
    assert!(parse_line("x;y").parsed().is_none());
    assert!(parse_line(LINE_TCOM).parsed().is_some());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Event serialization
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `Event` serializes to a flat string-keyed map, common fields plus
/// the schema attributes
#[test]
fn test_Event_serialize_flat_map() {
    let event: Event = parse_line_ok(LINE_TCOM);
    let value = serde_json::to_value(&event).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object["timestamp"], "2025-01-01T10:00:00");
    assert_eq!(object["reference_id"], "REF3");
    assert_eq!(object["type"], "TCOM");
    assert_eq!(object["transfer_id"], "REF3");
    assert_eq!(object["result_code"], "0");
    assert_eq!(object["source_agent"], "AGT1");
    assert_eq!(object["destination_qmgr"], "QM2");
    assert_eq!(object["user_id"], "USER1");
    // flat: exactly the common fields plus the schema attributes
    assert_eq!(object.len(), 3 + 7);
}

#[test]
fn test_Event_serialize_MACT_has_no_alias() {
    let event: Event = parse_line_ok(LINE_MACT_START);
    let value = serde_json::to_value(&event).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.get("id").is_none());
    assert!(object.get("transfer_id").is_none());
    assert_eq!(object["monitor_name"], "MONITOR1");
}
