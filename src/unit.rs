//! Type-level time units and unit-tagged duration values.
//!
//! A [`UnitDuration`] pairs a numeric magnitude with a compile-time unit tag,
//! so `UnitDuration<i64, Millis>` and `UnitDuration<f64, Seconds>` are
//! distinct types that can never be mixed up. Conversion between any two
//! unit/representation pairs is total and never fails; integer targets
//! truncate toward zero, floating-point targets round.

use core::fmt;
use core::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// A fixed time unit, expressed as a rational multiple of one second.
///
/// The set of units is closed: `Hours`, `Minutes`, `Seconds`, `Millis`,
/// `Micros` and `Nanos`. One tick of the unit lasts `NUM / DEN` seconds.
pub trait TimeUnit: sealed::Sealed {
    /// Numerator of the unit length in seconds.
    const NUM: u128;

    /// Denominator of the unit length in seconds.
    const DEN: u128;

    /// Short display label ("h", "m", "s", "ms", "us" or "ns").
    const LABEL: &'static str;
}

/// Unit tag: hours (3600 s).
pub enum Hours {}
/// Unit tag: minutes (60 s).
pub enum Minutes {}
/// Unit tag: seconds.
pub enum Seconds {}
/// Unit tag: milliseconds (1/1 000 s).
pub enum Millis {}
/// Unit tag: microseconds (1/1 000 000 s).
pub enum Micros {}
/// Unit tag: nanoseconds (1/1 000 000 000 s).
pub enum Nanos {}

macro_rules! impl_time_unit {
    ($unit:ty, $num:expr, $den:expr, $label:expr) => {
        impl sealed::Sealed for $unit {}
        impl TimeUnit for $unit {
            const NUM: u128 = $num;
            const DEN: u128 = $den;
            const LABEL: &'static str = $label;
        }
    };
}

impl_time_unit!(Hours, 3600, 1, "h");
impl_time_unit!(Minutes, 60, 1, "m");
impl_time_unit!(Seconds, 1, 1, "s");
impl_time_unit!(Millis, 1, 1_000, "ms");
impl_time_unit!(Micros, 1, 1_000_000, "us");
impl_time_unit!(Nanos, 1, 1_000_000_000, "ns");

/// Returns the display label for a unit.
#[inline]
pub fn label<U: TimeUnit>() -> &'static str {
    U::LABEL
}

/// Numeric representation usable as a duration magnitude.
///
/// Implemented for `i64`, `u64`, `i128`, `f32` and `f64`. Integer
/// representations convert through exact `i128` arithmetic; floating-point
/// representations convert through `f64`.
pub trait TimeRep: Copy + PartialEq + PartialOrd {
    /// The zero magnitude.
    const ZERO: Self;

    /// True for integer representations. Selects the exact integer
    /// conversion path when both endpoints are integral.
    const INTEGRAL: bool;

    /// Widens to `i128`, truncating toward zero for floats.
    fn to_i128(self) -> i128;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows from `i128`.
    fn from_i128(value: i128) -> Self;

    /// Narrows from `f64`. Truncates toward zero for integer targets.
    fn from_f64(value: f64) -> Self;

    /// Saturating addition (plain addition for floats).
    fn saturating_add(self, other: Self) -> Self;

    /// Saturating subtraction (plain subtraction for floats).
    fn saturating_sub(self, other: Self) -> Self;
}

macro_rules! impl_time_rep_int {
    ($rep:ty) => {
        impl TimeRep for $rep {
            const ZERO: Self = 0;
            const INTEGRAL: bool = true;

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_i128(value: i128) -> Self {
                value as $rep
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $rep
            }

            #[inline]
            fn saturating_add(self, other: Self) -> Self {
                <$rep>::saturating_add(self, other)
            }

            #[inline]
            fn saturating_sub(self, other: Self) -> Self {
                <$rep>::saturating_sub(self, other)
            }
        }
    };
}

macro_rules! impl_time_rep_float {
    ($rep:ty) => {
        impl TimeRep for $rep {
            const ZERO: Self = 0.0;
            const INTEGRAL: bool = false;

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_i128(value: i128) -> Self {
                value as $rep
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $rep
            }

            #[inline]
            fn saturating_add(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn saturating_sub(self, other: Self) -> Self {
                self - other
            }
        }
    };
}

impl_time_rep_int!(i64);
impl_time_rep_int!(u64);
impl_time_rep_int!(i128);
impl_time_rep_float!(f32);
impl_time_rep_float!(f64);

/// A duration magnitude tagged with its time unit.
///
/// The unit tag is zero-sized; a `UnitDuration<R, U>` is exactly as large as
/// its representation `R`.
pub struct UnitDuration<R: TimeRep, U: TimeUnit> {
    value: R,
    _unit: PhantomData<U>,
}

impl<R: TimeRep, U: TimeUnit> UnitDuration<R, U> {
    /// The zero duration.
    pub const ZERO: Self = Self {
        value: R::ZERO,
        _unit: PhantomData,
    };

    /// Creates a duration of `value` ticks of unit `U`.
    #[inline]
    pub const fn new(value: R) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Returns the raw magnitude.
    #[inline]
    pub fn value(self) -> R {
        self.value
    }

    /// Returns the unit's display label.
    #[inline]
    pub fn unit_label(self) -> &'static str {
        U::LABEL
    }

    /// Reinterprets this duration in another unit and representation.
    ///
    /// Conversion preserves the duration's meaning (magnitude times unit
    /// length) up to the precision of the target representation. When both
    /// representations are integral the result is computed exactly in `i128`
    /// and truncated toward zero; otherwise it is computed in `f64`.
    /// Integer round-trips through a coarser unit are therefore lossy, which
    /// mirrors plain truncating duration casts.
    #[inline]
    pub fn convert<R2: TimeRep, U2: TimeUnit>(self) -> UnitDuration<R2, U2> {
        // Scale factor from U to U2: (U::NUM / U::DEN) / (U2::NUM / U2::DEN).
        let num = U::NUM * U2::DEN;
        let den = U::DEN * U2::NUM;

        if R::INTEGRAL && R2::INTEGRAL {
            UnitDuration::new(R2::from_i128(self.value.to_i128() * num as i128 / den as i128))
        } else {
            UnitDuration::new(R2::from_f64(self.value.to_f64() * num as f64 / den as f64))
        }
    }

    /// Saturating addition of two durations in the same unit.
    #[inline]
    pub fn saturating_add(self, other: Self) -> Self {
        Self::new(self.value.saturating_add(other.value))
    }

    /// Saturating subtraction of two durations in the same unit.
    #[inline]
    pub fn saturating_sub(self, other: Self) -> Self {
        Self::new(self.value.saturating_sub(other.value))
    }
}

// Manual impls: derives would put unnecessary bounds on the unit tag.

impl<R: TimeRep, U: TimeUnit> Clone for UnitDuration<R, U> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: TimeRep, U: TimeUnit> Copy for UnitDuration<R, U> {}

impl<R: TimeRep, U: TimeUnit> PartialEq for UnitDuration<R, U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: TimeRep, U: TimeUnit> PartialOrd for UnitDuration<R, U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<R: TimeRep + fmt::Debug, U: TimeUnit> fmt::Debug for UnitDuration<R, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.value, U::LABEL)
    }
}

impl<R: TimeRep + fmt::Display, U: TimeUnit> fmt::Display for UnitDuration<R, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::LABEL)
    }
}

#[cfg(feature = "defmt")]
impl<R: TimeRep + defmt::Format, U: TimeUnit> defmt::Format for UnitDuration<R, U> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} {}", self.value, U::LABEL);
    }
}
