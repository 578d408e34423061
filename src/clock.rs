//! Concrete time sources backed by the host platform.
//!
//! [`CpuClock`] measures process CPU time: a sleeping or blocked process sees
//! little to no advance on it while wall-clock time moves on. Exactly one
//! backend is compiled per target. [`MonotonicClock`] and [`SystemClock`]
//! wrap the host's monotonic and wall clocks for stopwatches that should
//! track real elapsed time instead.
//!
//! All instants here are nanosecond-valued; differences come out as
//! [`ClockDuration`].

use crate::stopwatch::Stopwatch;
use crate::time::{TimeInstant, TimeSource};
use crate::unit::{Millis, Nanos, UnitDuration};

/// Native duration of the built-in clocks: signed nanosecond ticks.
pub type ClockDuration = UnitDuration<i64, Nanos>;

/// An instant of process CPU time, in nanoseconds consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CpuInstant(i64);

impl TimeInstant for CpuInstant {
    type Duration = ClockDuration;

    #[inline]
    fn duration_since(&self, earlier: Self) -> ClockDuration {
        UnitDuration::new(self.0 - earlier.0)
    }
}

/// Monotonic process-CPU-time source.
///
/// `now()` is safe to call from any number of threads; the reading covers CPU
/// time consumed by all threads of the process. Readings are meaningless
/// across processes and are not correlated with wall-clock time.
///
/// `now()` never fails. Should the underlying platform call ever fail, the
/// reading silently degrades to zero rather than surfacing an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuClock;

impl CpuClock {
    /// Creates the clock. Stateless; all instances are interchangeable.
    pub const fn new() -> Self {
        CpuClock
    }
}

impl TimeSource<CpuInstant> for CpuClock {
    #[inline]
    fn now(&self) -> CpuInstant {
        CpuInstant(cpu_time_ns())
    }
}

#[cfg(unix)]
fn cpu_time_ns() -> i64 {
    // Zeroed init: timespec has extra padding fields on some targets.
    let mut ts: libc::timespec = unsafe { core::mem::zeroed() };
    // CLOCK_PROCESS_CPUTIME_ID cannot fail on a conforming kernel; a nonzero
    // return leaves the zeroed reading in place.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
    debug_assert_eq!(rc, 0);
    ts.tv_sec as i64 * 1_000_000_000 + ts.tv_nsec as i64
}

#[cfg(windows)]
fn cpu_time_ns() -> i64 {
    use std::sync::OnceLock;
    use windows_sys::Win32::System::Performance::{
        QueryPerformanceCounter, QueryPerformanceFrequency,
    };

    // The counter frequency is fixed at boot; query it once. OnceLock keeps
    // the first concurrent use race-free.
    static TICKS_PER_SEC: OnceLock<i64> = OnceLock::new();

    let freq = *TICKS_PER_SEC.get_or_init(|| {
        let mut f: i64 = 0;
        unsafe { QueryPerformanceFrequency(&mut f) };
        f.max(1)
    });

    let mut count: i64 = 0;
    unsafe { QueryPerformanceCounter(&mut count) };
    (count as i128 * 1_000_000_000 / freq as i128) as i64
}

// Portable fallback: a monotonic reading anchored at first use. Degraded to
// wall-clock semantics on targets with neither POSIX CPU clocks nor the
// Windows performance counter.
#[cfg(not(any(unix, windows)))]
fn cpu_time_ns() -> i64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ANCHOR: OnceLock<Instant> = OnceLock::new();

    let anchor = *ANCHOR.get_or_init(Instant::now);
    Instant::now().duration_since(anchor).as_nanos() as i64
}

/// An instant of the host's monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonotonicInstant(std::time::Instant);

impl TimeInstant for MonotonicInstant {
    type Duration = ClockDuration;

    #[inline]
    fn duration_since(&self, earlier: Self) -> ClockDuration {
        UnitDuration::new(self.0.saturating_duration_since(earlier.0).as_nanos() as i64)
    }
}

/// High-resolution monotonic wall-elapsed time source.
///
/// Backed by [`std::time::Instant`]. Advances during sleep and blocking,
/// unlike [`CpuClock`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl MonotonicClock {
    /// Creates the clock. Stateless; all instances are interchangeable.
    pub const fn new() -> Self {
        MonotonicClock
    }
}

impl TimeSource<MonotonicInstant> for MonotonicClock {
    #[inline]
    fn now(&self) -> MonotonicInstant {
        MonotonicInstant(std::time::Instant::now())
    }
}

/// An instant of the system wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SystemInstant(std::time::SystemTime);

impl TimeInstant for SystemInstant {
    type Duration = ClockDuration;

    /// Saturates to zero if the system clock stepped backwards between the
    /// two readings.
    #[inline]
    fn duration_since(&self, earlier: Self) -> ClockDuration {
        let delta = self.0.duration_since(earlier.0).unwrap_or_default();
        UnitDuration::new(delta.as_nanos() as i64)
    }
}

/// System wall-clock time source.
///
/// Subject to clock adjustments (NTP steps, manual changes); prefer
/// [`MonotonicClock`] for measurements unless wall-clock correlation is
/// required.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    /// Creates the clock. Stateless; all instances are interchangeable.
    pub const fn new() -> Self {
        SystemClock
    }
}

impl TimeSource<SystemInstant> for SystemClock {
    #[inline]
    fn now(&self) -> SystemInstant {
        SystemInstant(std::time::SystemTime::now())
    }
}

/// Stopwatch over process CPU time.
pub type CpuStopwatch<'a, U = Millis> = Stopwatch<'a, CpuInstant, CpuClock, U>;

/// Stopwatch over monotonic wall-elapsed time.
pub type MonotonicStopwatch<'a, U = Millis> = Stopwatch<'a, MonotonicInstant, MonotonicClock, U>;

/// Stopwatch over system wall-clock time.
pub type SystemStopwatch<'a, U = Millis> = Stopwatch<'a, SystemInstant, SystemClock, U>;
