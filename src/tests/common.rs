// src/tests/common.rs

//! Common helpers and sample log lines for testing.

use crate::common::FPath;
use crate::data::event::{parse_line, Event, ResultParseLine};

use std::io::Write;

use ::tempfile::NamedTempFile;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// sample log lines
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const LINE_MACT_START: &str = "2025-01-01T09:00:00;REFM1;[MACT];0;MONITOR1;AGENT1;QM1;start";
pub const LINE_MACT_STOP: &str = "2025-01-01T09:30:00;REFM2;[MACT];0;MONITOR2;AGENT1;QM1;stop";
pub const LINE_MCRT: &str = "2025-01-01T08:59:00;REFM1;[MCRT];MONITOR1;AGENT1;QM1;create";
pub const LINE_MFIR: &str = "2025-01-01T09:05:00;REFM1;[MFIR];0;MONITOR1;AGENT1;QM1;fire";
pub const LINE_AUTH: &str =
    "2025-01-01T09:10:00;REFA1;[AUTH];0;transfer;ADMINISTRATOR;user1;mquser1";
pub const LINE_SSIN: &str =
    "2025-01-02T08:00:00;REFS1;[SSIN];0;AGENT1;schedule;scheduser;;Europe/London;1";
pub const LINE_SSTR: &str = "2025-01-02T08:00:01;REFS1;[SSTR];AGENT1;QM1;AGENT2;QM2";
pub const LINE_SSTS: &str =
    "2025-01-02T08:00:02;REFS1;[SSTS];/in/report.csv;SRC.QUEUE;;/out/report.csv;file";
pub const LINE_SEXP: &str = "2025-01-03T08:00:00;REFS1;[SEXP];0;AGENT1;;scheduser";
pub const LINE_TSTR: &str =
    "2025-01-01T10:00:00;414d5120514d31;[TSTR];0;AGENT1;QM1;;AGENT2;QM2;user1;JOB1";
pub const LINE_TCOM: &str = "2025-01-01T10:00:00;REF3;[TCOM];0;AGT1;QM1;;AGT2;QM2;;USER1";
pub const LINE_TCOM_FAILED: &str =
    "2025-01-01T11:00:00;414d5120514d31;[TCOM];40;AGENT1;QM1;;AGENT2;QM2;;user1";
pub const LINE_TCAN: &str =
    "2025-01-01T11:30:00;414d5120514d32;[TCAN];41;AGENT1;QM1;;AGENT2;QM2;;user2";
pub const LINE_TPRO: &str =
    "2025-01-01T10:30:00;414d5120514d31;[TPRO];0;/in/data.dat;;file;;;;;;;/out/data.dat;;file";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// helper to wrap the match and panic checks
pub fn parse_line_ok(raw: &str) -> Event {
    match parse_line(raw) {
        ResultParseLine::Parsed(event) => event,
        result => {
            panic!("ERROR: parse_line({:?}) returned {:?}, expected Parsed", raw, result);
        }
    }
}

/// create a temporary file with the passed data
pub fn create_temp_log(data: &str) -> NamedTempFile {
    let mut ntf = NamedTempFile::new().unwrap();
    ntf.write_all(data.as_bytes())
        .unwrap();
    ntf.flush().unwrap();

    ntf
}

/// small helper to write `NamedTempFile` path as a `FPath`
#[allow(non_snake_case)]
pub fn NTF_Path(ntf: &NamedTempFile) -> FPath {
    ntf.path()
        .to_string_lossy()
        .to_string()
}
