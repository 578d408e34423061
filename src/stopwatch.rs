//! Stopwatch state machine with elapsed-time accumulation and reporting.
//!
//! Provides [`Stopwatch`] which accumulates elapsed time across
//! start/stop/resume cycles against a pluggable [`TimeSource`], and
//! [`StopwatchBuilder`] for configuring auto-start and drop reporting.

use core::fmt;
use core::marker::PhantomData;

use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::unit::{Millis, TimeRep, TimeUnit, UnitDuration};

/// Capacity of the fixed formatting buffer used by [`Stopwatch::elapsed_str`].
///
/// Large enough for any `f64` magnitude, a unit label and a short name.
pub const REPORT_CAPACITY: usize = 96;

/// An accumulating stopwatch bound to a time source.
///
/// The stopwatch owns a display name, an accumulated elapsed duration in the
/// clock's native representation and the instant of the last start. There is
/// no explicit running flag; behavior is defined entirely by which operation
/// is called:
///
/// - [`start`](Stopwatch::start) zeroes the accumulator and begins a window
/// - [`resume`](Stopwatch::resume) begins a window without zeroing
/// - [`stop`](Stopwatch::stop) adds the current window to the accumulator
/// - [`reset`](Stopwatch::reset) zeroes the accumulator only
///
/// Calling `stop()` without a preceding `start()`/`resume()` measures from
/// the construction instant; validating that is the caller's responsibility.
///
/// A stopwatch has value semantics: cloning copies the name, the accumulator
/// and the drop-report flag, so a cloned scoped stopwatch reports as well.
/// Instances are not synchronized; one thread owns a stopwatch at a time,
/// while the backing time source may be shared freely.
///
/// # Type Parameters
/// * `'a` - Lifetime of the time source reference and the name
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `U` - Default unit for reports and [`elapsed`](Stopwatch::elapsed)
pub struct Stopwatch<'a, I: TimeInstant, T: TimeSource<I>, U: TimeUnit = Millis> {
    name: &'a str,
    time_source: &'a T,
    accumulated: I::Duration,
    last_start: I,
    report_on_drop: bool,
    _unit: PhantomData<U>,
}

impl<'a, I: TimeInstant, T: TimeSource<I>, U: TimeUnit> Stopwatch<'a, I, T, U> {
    /// Display label of the default report unit.
    pub const UNIT_LABEL: &'static str = U::LABEL;

    /// Creates a stopped stopwatch with a zero accumulator.
    ///
    /// The measurement window is not open; call [`start`](Stopwatch::start)
    /// or [`resume`](Stopwatch::resume) to open one. The construction instant
    /// is captured so that a stray `stop()` measures from construction rather
    /// than from an arbitrary time point.
    pub fn new(name: &'a str, time_source: &'a T) -> Self {
        Self {
            name,
            time_source,
            accumulated: I::Duration::ZERO,
            last_start: time_source.now(),
            report_on_drop: false,
            _unit: PhantomData,
        }
    }

    /// Creates a stopwatch that is already running.
    ///
    /// Equivalent to [`new`](Stopwatch::new) followed by an immediate
    /// [`start`](Stopwatch::start).
    pub fn started(name: &'a str, time_source: &'a T) -> Self {
        let mut sw = Self::new(name, time_source);
        sw.start();
        sw
    }

    /// Creates a running stopwatch that stops and reports when dropped.
    ///
    /// The report is one line on standard output: the name directly followed
    /// by the elapsed magnitude in unit `U` and the unit label.
    #[cfg(feature = "std")]
    pub fn scoped(name: &'a str, time_source: &'a T) -> Self {
        let mut sw = Self::started(name, time_source);
        sw.report_on_drop = true;
        sw
    }

    /// Creates a builder for configuring a stopwatch.
    pub fn builder(time_source: &'a T) -> StopwatchBuilder<'a, I, T, U> {
        StopwatchBuilder::new(time_source)
    }

    /// Resets the elapsed time and starts the stopwatch.
    ///
    /// Returns the instant the new measurement window opened.
    pub fn start(&mut self) -> I {
        self.reset();
        self.last_start = self.time_source.now();
        self.last_start
    }

    /// Resumes the stopwatch without resetting the elapsed time.
    ///
    /// Returns the instant the measurement window reopened. The accumulator
    /// is untouched; only a subsequent [`stop`](Stopwatch::stop) adds to it.
    pub fn resume(&mut self) -> I {
        self.last_start = self.time_source.now();
        self.last_start
    }

    /// Stops the stopwatch, adding the open window to the accumulator.
    ///
    /// Returns the stop instant, which also becomes the new window origin so
    /// repeated `stop()` calls accumulate consecutive deltas.
    pub fn stop(&mut self) -> I {
        let now = self.time_source.now();
        self.accumulated = self
            .accumulated
            .saturating_add(now.duration_since(self.last_start));
        self.last_start = now;
        now
    }

    /// Resets the elapsed time accumulator.
    ///
    /// Does not touch the window origin; a following `stop()` still measures
    /// from the last start.
    pub fn reset(&mut self) {
        self.accumulated = I::Duration::ZERO;
    }

    /// Returns the accumulated elapsed time in the clock's native duration.
    pub fn elapsed_clock(&self) -> I::Duration {
        self.accumulated
    }

    /// Returns the accumulated elapsed time in the default report unit.
    pub fn elapsed(&self) -> UnitDuration<f64, U> {
        self.accumulated.to_unit()
    }

    /// Returns the accumulated elapsed time in any unit and representation.
    pub fn elapsed_as<R2: TimeRep, U2: TimeUnit>(&self) -> UnitDuration<R2, U2> {
        self.accumulated.to_unit()
    }

    /// Returns the stopwatch name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Writes `<name><magnitude> <label>` to a sink, in the report unit.
    ///
    /// No separator between name and magnitude, no trailing line terminator.
    pub fn write_elapsed<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        write!(sink, "{}{}", self.name, self.elapsed())
    }

    /// Writes `<name><magnitude> <label>` to a sink, in the given unit and
    /// representation.
    pub fn write_elapsed_as<R2, U2, W>(&self, sink: &mut W) -> fmt::Result
    where
        R2: TimeRep + fmt::Display,
        U2: TimeUnit,
        W: fmt::Write,
    {
        write!(sink, "{}{}", self.name, self.elapsed_as::<R2, U2>())
    }

    /// Formats `<name><magnitude> <label>` into a fixed-capacity string.
    ///
    /// Output longer than [`REPORT_CAPACITY`] is truncated.
    pub fn elapsed_str(&self) -> heapless::String<REPORT_CAPACITY> {
        let mut out = heapless::String::new();
        let _ = self.write_elapsed(&mut out);
        out
    }

    /// Like [`elapsed_str`](Stopwatch::elapsed_str), in an arbitrary unit
    /// and representation.
    pub fn elapsed_str_in<R2, U2>(&self) -> heapless::String<REPORT_CAPACITY>
    where
        R2: TimeRep + fmt::Display,
        U2: TimeUnit,
    {
        let mut out = heapless::String::new();
        let _ = self.write_elapsed_as::<R2, U2, _>(&mut out);
        out
    }
}

impl<'a, I: TimeInstant, T: TimeSource<I>, U: TimeUnit> Clone for Stopwatch<'a, I, T, U> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            time_source: self.time_source,
            accumulated: self.accumulated,
            last_start: self.last_start,
            report_on_drop: self.report_on_drop,
            _unit: PhantomData,
        }
    }
}

/// Prints the elapsed time in the report unit, without the name.
impl<'a, I: TimeInstant, T: TimeSource<I>, U: TimeUnit> fmt::Display for Stopwatch<'a, I, T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.elapsed())
    }
}

#[cfg(feature = "std")]
impl<'a, I: TimeInstant, T: TimeSource<I>, U: TimeUnit> Drop for Stopwatch<'a, I, T, U> {
    fn drop(&mut self) {
        if self.report_on_drop {
            self.stop();
            println!("{}{}", self.name, self.elapsed());
        }
    }
}

/// Builder for configuring stopwatches.
///
/// Collects the construction-time policy choices: name, report unit,
/// auto-start and report-on-drop.
pub struct StopwatchBuilder<'a, I: TimeInstant, T: TimeSource<I>, U: TimeUnit = Millis> {
    name: &'a str,
    time_source: &'a T,
    auto_start: bool,
    report_on_drop: bool,
    _unit: PhantomData<(I, U)>,
}

impl<'a, I: TimeInstant, T: TimeSource<I>, U: TimeUnit> StopwatchBuilder<'a, I, T, U> {
    /// Creates a builder with an empty name, no auto-start and no drop report.
    pub fn new(time_source: &'a T) -> Self {
        Self {
            name: "",
            time_source,
            auto_start: false,
            report_on_drop: false,
            _unit: PhantomData,
        }
    }

    /// Sets the stopwatch name.
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = name;
        self
    }

    /// Selects the default report unit.
    pub fn unit<U2: TimeUnit>(self) -> StopwatchBuilder<'a, I, T, U2> {
        StopwatchBuilder {
            name: self.name,
            time_source: self.time_source,
            auto_start: self.auto_start,
            report_on_drop: self.report_on_drop,
            _unit: PhantomData,
        }
    }

    /// Starts the stopwatch at construction.
    pub fn auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    /// Stops and reports to standard output when the stopwatch is dropped.
    #[cfg(feature = "std")]
    pub fn report_on_drop(mut self, report_on_drop: bool) -> Self {
        self.report_on_drop = report_on_drop;
        self
    }

    /// Builds the stopwatch.
    pub fn build(self) -> Stopwatch<'a, I, T, U> {
        let mut sw = if self.auto_start {
            Stopwatch::started(self.name, self.time_source)
        } else {
            Stopwatch::new(self.name, self.time_source)
        };
        sw.report_on_drop = self.report_on_drop;
        sw
    }
}
