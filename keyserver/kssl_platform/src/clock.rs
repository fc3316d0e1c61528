//! Microsecond wall-clock time.

use std::fmt;
use std::ops::Sub;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const MICROS_PER_SEC: i64 = 1_000_000;

/// Seconds and microseconds since the Unix epoch (`struct timeval`).
///
/// `usec` is always in `0..1_000_000`; times before the epoch have a
/// negative `sec`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeVal {
    sec: i64,
    usec: i64,
}

impl TimeVal {
    /// Build from a `timeval` pair. Out-of-range `usec` carries into `sec`.
    pub fn new(sec: i64, usec: i64) -> Self {
        TimeVal {
            sec: sec.saturating_add(usec.div_euclid(MICROS_PER_SEC)),
            usec: usec.rem_euclid(MICROS_PER_SEC),
        }
    }

    /// Current wall-clock time (`gettimeofday`).
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self::from_micros(duration_micros(after)),
            Err(before) => Self::from_micros(-duration_micros(before.duration())),
        }
    }

    pub fn from_micros(micros: i64) -> Self {
        TimeVal {
            sec: micros.div_euclid(MICROS_PER_SEC),
            usec: micros.rem_euclid(MICROS_PER_SEC),
        }
    }

    #[inline]
    pub fn sec(self) -> i64 {
        self.sec
    }

    /// Always in `0..1_000_000`.
    #[inline]
    pub fn usec(self) -> i64 {
        self.usec
    }

    /// Total microseconds since the epoch, saturating.
    pub fn as_micros(self) -> i64 {
        self.sec
            .saturating_mul(MICROS_PER_SEC)
            .saturating_add(self.usec)
    }

    /// Time passed since `self`, zero if `self` is in the future.
    pub fn elapsed(self) -> Duration {
        Self::now() - self
    }
}

/// Difference between two times; zero when `rhs` is later.
impl Sub for TimeVal {
    type Output = Duration;

    fn sub(self, rhs: TimeVal) -> Duration {
        let micros = self.as_micros().saturating_sub(rhs.as_micros());
        Duration::from_micros(u64::try_from(micros).unwrap_or(0))
    }
}

impl fmt::Display for TimeVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.sec, self.usec)
    }
}

fn duration_micros(duration: Duration) -> i64 {
    i64::try_from(duration.as_micros()).unwrap_or(i64::MAX)
}
