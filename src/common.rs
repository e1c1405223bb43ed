// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

pub use std::fs::File;
pub use std::path::Path;

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;

/// A general-purpose counting type.
pub type Count = u64;

/// 0-based index into the `;`-split fields of one log line.
pub type FieldIndex = usize;

/// 1-based line number within the processed log file.
pub type LineNum = usize;

/// Delimiter between fields of one MFT event log line.
pub const FIELD_DELIMITER: char = ';';

/// Minimum count of `;`-split fields for a line to be considered at all;
/// `timestamp;reference_id;typeTag` plus at least one type-specific field.
pub const FIELD_COUNT_MIN: usize = 4;
