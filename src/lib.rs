#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Stopwatch`**: accumulates elapsed time across start/stop/resume cycles
//! - **`StopwatchBuilder`**: configures name, report unit, auto-start and drop reporting
//! - **`TimeSource` / `TimeInstant` / `TimeDuration`**: traits to implement for your timing system
//! - **`TimeUnit`**: type-level units (`Hours` through `Nanos`) with fixed labels
//! - **`UnitDuration`**: a magnitude tagged with its unit, convertible to any other unit
//! - **`CpuClock`**: process-CPU-time source (`std`)
//! - **`MonotonicClock` / `SystemClock`**: wall-time sources (`std`)
//!
//! A stopwatch borrows its time source, so one shared clock can back any
//! number of independent stopwatches. On `no_std` targets, implement
//! `TimeSource` for your platform timer; with `std`, use the built-in clocks.

pub mod stopwatch;
pub mod time;
pub mod unit;

#[cfg(feature = "std")]
pub mod clock;

pub use stopwatch::{REPORT_CAPACITY, Stopwatch, StopwatchBuilder};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use unit::{
    Hours, Micros, Millis, Minutes, Nanos, Seconds, TimeRep, TimeUnit, UnitDuration, label,
};

#[cfg(feature = "std")]
pub use clock::{
    ClockDuration, CpuClock, CpuInstant, CpuStopwatch, MonotonicClock, MonotonicInstant,
    MonotonicStopwatch, SystemClock, SystemInstant, SystemStopwatch,
};
