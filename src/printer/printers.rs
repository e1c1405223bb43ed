// src/printer/printers.rs

//! Functions to export derived collections as JSON to a file or to
//! stdout, and helpers to print colored text.
//!
//! JSON is written pretty-printed, matching the self-describing
//! human-readable interchange form the downstream consumers expect.

use crate::common::FPath;
use crate::de_err;

use std::fs::File;
use std::io;
use std::io::Write;

use ::serde::Serialize;
#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// JSON export
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Sentinel path meaning "write to stdout instead of a file".
pub const JSON_SINK_STDOUT: &str = "-";

/// Where one exported JSON artifact is written.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum JsonSink {
    Stdout,
    File(FPath),
}

impl JsonSink {
    /// Map a user-passed path to a sink; [`JSON_SINK_STDOUT`] selects
    /// stdout.
    pub fn from_path(path: &str) -> JsonSink {
        match path {
            JSON_SINK_STDOUT => JsonSink::Stdout,
            _ => JsonSink::File(path.to_string()),
        }
    }

    /// Serialize `value` pretty-printed into this sink.
    pub fn write<T>(
        &self,
        value: &T,
    ) -> io::Result<()>
    where
        T: ?Sized + Serialize,
    {
        match self {
            JsonSink::Stdout => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                write_json(&mut lock, value)
            }
            JsonSink::File(path) => {
                let mut file = match File::create(path) {
                    Ok(file) => file,
                    Err(err) => {
                        de_err!("File::create({:?}) {}", path, err);
                        return Err(err);
                    }
                };
                write_json(&mut file, value)
            }
        }
    }
}

/// Serialize `value` as pretty-printed JSON into `writer`, with a
/// trailing newline.
pub fn write_json<W, T>(
    writer: &mut W,
    value: &T,
) -> io::Result<()>
where
    W: Write,
    T: ?Sized + Serialize,
{
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writer.write_all(b"\n")?;

    Ok(())
}

/// Serialize `value` as pretty-printed JSON into a `String`.
///
/// Infallible for the collection types this crate exports; a
/// serialization failure returns the error rendered as a string
/// so callers need not thread `Result` through display paths.
pub fn json_to_string_pretty<T>(value: &T) -> String
where
    T: ?Sized + Serialize,
{
    match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(err) => format!("<serialization error: {}>", err),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// colored printing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print colored `value` to `out`.
pub fn print_colored(
    color: Color,
    value: &[u8],
    out: &mut termcolor::StandardStream,
) -> io::Result<()> {
    match out.set_color(ColorSpec::new().set_fg(Some(color))) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.set_color({:?}) returned error {}", color, err);
            return Err(err);
        }
    };
    match out.write(value) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.write(…) returned error {}", err);
            return Err(err);
        }
    }
    match out.reset() {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.reset() returned error {}", err);
            return Err(err);
        }
    }
    out.flush()?;

    Ok(())
}

/// Print colored `value` to stdout.
pub fn print_colored_stdout(
    color: Color,
    color_choice_opt: Option<ColorChoice>,
    value: &[u8],
) -> io::Result<()> {
    let choice: ColorChoice = match color_choice_opt {
        Some(choice_) => choice_,
        None => ColorChoice::Auto,
    };
    let mut stdout = termcolor::StandardStream::stdout(choice);
    let _stdout_lock = io::stdout().lock();

    print_colored(color, value, &mut stdout)
}
