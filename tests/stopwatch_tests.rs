//! Integration tests for Stopwatch against a mock time source

mod common;

use common::{MockTimeSource, TestInstant};
use cpu_stopwatch::{Micros, Millis, Nanos, Seconds, Stopwatch, TimeDuration, UnitDuration};

type TestStopwatch<'a, U = Millis> = Stopwatch<'a, TestInstant, MockTimeSource, U>;

#[test]
fn full_measurement_scenario() {
    let timer = MockTimeSource::new();
    let mut sw: TestStopwatch = Stopwatch::new("query: ", &timer);

    // first window
    sw.start();
    timer.advance(120);
    sw.stop();
    assert_eq!(sw.elapsed_clock().value(), 120);

    // paused: nothing accumulates
    timer.advance(10_000);
    assert_eq!(sw.elapsed_clock().value(), 120);

    // second window continues the accumulation
    sw.resume();
    timer.advance(80);
    sw.stop();
    assert_eq!(sw.elapsed_clock().value(), 200);

    // a fresh start throws the history away
    sw.start();
    timer.advance(5);
    sw.stop();
    assert_eq!(sw.elapsed_clock().value(), 5);
}

#[test]
fn queries_do_not_mutate_state() {
    let timer = MockTimeSource::new();
    let mut sw: TestStopwatch = Stopwatch::started("", &timer);

    timer.advance(60);
    sw.stop();

    for _ in 0..3 {
        assert_eq!(sw.elapsed_clock().value(), 60);
        assert_eq!(sw.elapsed().value(), 60.0);
        assert_eq!(sw.elapsed_as::<i64, Micros>().value(), 60_000);
        assert_eq!(sw.elapsed_str().as_str(), "60 ms");
    }
}

#[test]
fn elapsed_as_covers_every_unit() {
    let timer = MockTimeSource::new();
    let mut sw: TestStopwatch = Stopwatch::started("", &timer);

    // 2.5 hours
    timer.advance(9_000_000);
    sw.stop();

    assert_eq!(sw.elapsed_as::<f64, cpu_stopwatch::Hours>().value(), 2.5);
    assert_eq!(sw.elapsed_as::<i64, cpu_stopwatch::Hours>().value(), 2);
    assert_eq!(sw.elapsed_as::<i64, cpu_stopwatch::Minutes>().value(), 150);
    assert_eq!(sw.elapsed_as::<i64, Seconds>().value(), 9_000);
    assert_eq!(sw.elapsed_as::<i64, Millis>().value(), 9_000_000);
    assert_eq!(sw.elapsed_as::<i64, Micros>().value(), 9_000_000_000);
    assert_eq!(sw.elapsed_as::<i64, Nanos>().value(), 9_000_000_000_000);
}

#[test]
fn scenario_report_matches_expected_format() {
    let timer = MockTimeSource::new();
    let mut sw: TestStopwatch = Stopwatch::started("load: ", &timer);

    timer.advance(100);
    sw.stop();

    let millis = sw.elapsed_as::<i64, Millis>().value();
    assert!(millis >= 90 && millis <= 110);

    let report = sw.elapsed_str();
    assert!(report.starts_with("load: "));
    assert!(report.ends_with(" ms"));
    assert_eq!(report.as_str(), "load: 100 ms");
}

#[test]
fn builder_combinations_behave_like_the_constructors() {
    let timer = MockTimeSource::new();

    // idle build: stays at zero until started
    let idle: TestStopwatch = TestStopwatch::builder(&timer).name("a").build();
    timer.advance(100);
    assert_eq!(idle.elapsed_clock(), UnitDuration::ZERO);

    // auto-start build: window opened at build time
    let mut running: TestStopwatch = TestStopwatch::builder(&timer)
        .name("b")
        .auto_start(true)
        .build();
    timer.advance(50);
    running.stop();
    assert_eq!(running.elapsed_clock().value(), 50);

    // unit selection carries through reports
    let mut seconds = TestStopwatch::<Millis>::builder(&timer)
        .name("c: ")
        .unit::<Seconds>()
        .auto_start(true)
        .build();
    timer.advance(2_500);
    seconds.stop();
    assert_eq!(seconds.elapsed_str().as_str(), "c: 2.5 s");
}

#[test]
fn report_on_drop_stops_and_reports() {
    let timer = MockTimeSource::new();
    {
        let _sw: TestStopwatch = TestStopwatch::builder(&timer)
            .name("scoped: ")
            .auto_start(true)
            .report_on_drop(true)
            .build();
        timer.advance(25);
        // drop fires an implicit stop() and prints one line to stdout
    }
    timer.advance(1);
}

#[test]
fn clock_native_duration_bridges_into_the_unit_model() {
    let timer = MockTimeSource::new();
    let mut sw: TestStopwatch = Stopwatch::started("", &timer);

    timer.advance(1_234);
    sw.stop();

    let native = sw.elapsed_clock();
    let us: UnitDuration<i64, Micros> = native.to_unit();
    assert_eq!(us.value(), 1_234_000);
}

#[test]
fn two_stopwatches_share_one_time_source_independently() {
    let timer = MockTimeSource::new();
    let mut a: TestStopwatch = Stopwatch::started("a", &timer);
    let mut b: TestStopwatch = Stopwatch::new("b", &timer);

    timer.advance(10);
    b.start();
    timer.advance(20);
    a.stop();
    b.stop();

    assert_eq!(a.elapsed_clock().value(), 30);
    assert_eq!(b.elapsed_clock().value(), 20);
}
