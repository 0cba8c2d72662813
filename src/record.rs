//! Line-oriented record serialization.
//!
//! A record is any type that can be written as a single line of
//! `|`-separated fields and read back from that line. Fields are
//! positional; there is no escaping, so a field value must never
//! contain the separator.

use crate::error::{EatsError, Result};

/// Separator between fields on a record line.
pub const FIELD_SEPARATOR: char = '|';

/// A value that persists as one line of pipe-delimited text.
///
/// Implementations must round-trip: `R::from_line(&r.to_line())` yields
/// a value equal to `r` for every well-formed `r`.
pub trait Record: Sized {
    /// Serialize to a single line, without the trailing newline.
    fn to_line(&self) -> String;

    /// Parse a single line produced by [`Record::to_line`].
    fn from_line(line: &str) -> Result<Self>;
}

/// A record carrying a numeric identifier.
pub trait Identified {
    fn id(&self) -> u32;
}

/// Split a record line into exactly `expected` fields.
///
/// A trailing carriage return is ignored so files edited on Windows
/// still parse.
pub fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != expected {
        return Err(EatsError::Parse(format!(
            "expected {} fields, found {} in '{}'",
            expected,
            fields.len(),
            line
        )));
    }
    Ok(fields)
}

/// Parse a numeric field, naming the field in the error.
pub fn parse_u32(field: &str, name: &str) -> Result<u32> {
    field
        .trim()
        .parse()
        .map_err(|_| EatsError::Parse(format!("{} is not a number: '{}'", name, field)))
}
