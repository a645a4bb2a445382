// timefn - monotonic timer abstraction used by the roundtrip driver
//
// `std::time::Instant` is monotonic on all supported platforms, so wall-clock
// adjustments during a run never skew a measurement.  The `Clock` trait lets
// tests substitute a scripted time source.

use std::time::{Duration, Instant};

/// Microsecond duration type used for every trial measurement.
pub type DurationUs = u64;

/// A source of monotonic timestamps.
///
/// Timestamps are offsets from an arbitrary, clock-specific origin.  Only the
/// difference between two readings of the same clock is meaningful.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// The production clock, backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        MonotonicClock::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Returns the whole microseconds between two readings of the same clock.
///
/// Sub-microsecond remainders are truncated.  A reversed pair saturates to 0
/// rather than panicking.
pub fn span_us(start: Duration, end: Duration) -> DurationUs {
    let micros = end.saturating_sub(start).as_micros();
    DurationUs::try_from(micros).unwrap_or(DurationUs::MAX)
}
