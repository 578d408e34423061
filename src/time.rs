//! Time abstraction traits for platform-agnostic timing.

use crate::unit::{TimeRep, TimeUnit, UnitDuration};

/// Trait for abstracting time sources.
///
/// `now()` takes `&self` so a single source can back many independent
/// stopwatches, including from multiple threads when the implementation
/// allows it.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for clock-native duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Saturating addition.
    fn saturating_add(self, other: Self) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;

    /// Converts into a unit-tagged duration of any representation and unit.
    fn to_unit<R: TimeRep, U: TimeUnit>(self) -> UnitDuration<R, U>;
}

/// Trait abstraction for instant types.
///
/// Instants are opaque: only the difference of two instants from the same
/// source is meaningful. Instants from different sources must not be mixed.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

// Every unit-tagged duration is usable as a clock-native duration.
impl<R: TimeRep, U: TimeUnit> TimeDuration for UnitDuration<R, U> {
    const ZERO: Self = UnitDuration::ZERO;

    #[inline]
    fn saturating_add(self, other: Self) -> Self {
        UnitDuration::saturating_add(self, other)
    }

    #[inline]
    fn saturating_sub(self, other: Self) -> Self {
        UnitDuration::saturating_sub(self, other)
    }

    #[inline]
    fn to_unit<R2: TimeRep, U2: TimeUnit>(self) -> UnitDuration<R2, U2> {
        self.convert()
    }
}
