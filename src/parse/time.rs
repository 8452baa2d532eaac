//! Relative handshake-age resolution.
//!
//! `wg show` reports the latest handshake as a relative age, e.g.
//! `"13 hours, 56 minutes, 18 seconds ago"`. Resolution subtracts the total
//! age from a caller-supplied reference time; timestamps stay naive local
//! time with no UTC offset, matching what scrapers of this exporter already
//! expect.

use chrono::{Duration, NaiveDateTime};

/// Unit word to seconds multiplier.
const UNITS: &[(&str, i64)] = &[
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
    ("second", 1),
];

/// Resolve a relative-age phrase against `reference`.
///
/// Each of the four units is searched for independently; a phrase naming
/// none of them (or only unknown unit words) resolves to `reference`
/// itself. Unknown unit words are not an error, they contribute zero.
pub fn resolve_relative(phrase: &str, reference: NaiveDateTime) -> NaiveDateTime {
    let mut seconds_ago = 0i64;
    for (unit, unit_seconds) in UNITS {
        if let Some(count) = clause_count(phrase, unit) {
            seconds_ago += count * unit_seconds;
        }
    }
    reference - Duration::seconds(seconds_ago)
}

/// Find the count of the first `"<integer> <unit>"` clause in `phrase`.
///
/// The unit word may be pluralized or trailed by punctuation; the count
/// must be the token immediately before it.
fn clause_count(phrase: &str, unit: &str) -> Option<i64> {
    let mut previous: Option<i64> = None;
    for token in phrase.split([' ', ',']).filter(|t| !t.is_empty()) {
        if token.starts_with(unit) {
            return previous;
        }
        previous = token.parse().ok();
    }
    None
}
