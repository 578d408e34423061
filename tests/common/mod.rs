//! Shared test infrastructure for cpu-stopwatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use cpu_stopwatch::{Millis, TimeInstant, TimeSource, UnitDuration};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock instant type for testing (millisecond-native durations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub i64);

impl TimeInstant for TestInstant {
    type Duration = UnitDuration<i64, Millis>;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        UnitDuration::new(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<i64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(0),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: i64) {
        self.current_time.set(self.current_time.get() + millis);
    }

    pub fn set_time(&self, millis: i64) {
        self.current_time.set(millis);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        TestInstant(self.current_time.get())
    }
}
