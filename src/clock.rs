//! Reference clock capability.
//!
//! Handshake resolution needs a "now" to subtract relative ages from. The
//! clock is an explicit capability threaded through each scrape, obtained
//! once per invocation, so results are reproducible under test and two
//! concurrent scrapes never observe mid-parse drift.

use std::fmt::Debug;

use chrono::{Local, NaiveDateTime};

/// Supplies the reference time for one scrape.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> NaiveDateTime;
}

/// The system wall clock, in naive local time.
///
/// Local time without an offset is what `wg show` users compare against;
/// keeping it naive is a compatibility constraint of the output format,
/// not an oversight.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_returns_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
