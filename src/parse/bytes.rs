//! IEC byte-size parsing.
//!
//! Transfer totals appear as `"<decimal> <unit>"` with binary (1024-based)
//! units. Misreading a unit would silently misreport traffic volume, so an
//! unrecognized unit is a hard error rather than a fallback to bytes.

use thiserror::Error;

/// IEC unit to multiplier (powers of 1024).
const UNITS: &[(&str, f64)] = &[
    ("B", 1.0),
    ("KiB", 1024.0),
    ("MiB", 1024.0 * 1024.0),
    ("GiB", 1024.0 * 1024.0 * 1024.0),
    ("TiB", 1024.0 * 1024.0 * 1024.0 * 1024.0),
    ("PiB", 1024.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0),
];

/// Errors from normalizing extracted field values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The unit is not in the IEC table. Never masked: a silent default
    /// would corrupt the exported counters.
    #[error("unrecognized byte-size unit {0:?}")]
    UnknownByteUnit(String),

    /// The token is not of the form `"<decimal> <unit>"`.
    #[error("malformed byte-size token {0:?}")]
    MalformedByteSize(String),
}

/// Parse a `"<decimal> <IEC unit>"` token into an exact byte count.
///
/// The count is `floor(value * multiplier)` computed in f64, e.g.
/// `"2.11 MiB"` is `floor(2.11 * 1048576)` = `2212495`.
pub fn parse_bytes(token: &str) -> Result<u64, ParseError> {
    let (value, unit) = token
        .trim()
        .split_once(' ')
        .ok_or_else(|| ParseError::MalformedByteSize(token.to_owned()))?;
    let value: f64 = value
        .parse()
        .map_err(|_| ParseError::MalformedByteSize(token.to_owned()))?;
    let multiplier = UNITS
        .iter()
        .find(|(name, _)| *name == unit.trim())
        .map(|(_, multiplier)| multiplier)
        .ok_or_else(|| ParseError::UnknownByteUnit(unit.trim().to_owned()))?;
    Ok((value * multiplier) as u64)
}
