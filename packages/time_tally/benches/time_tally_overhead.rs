//! Benchmarks to measure the overhead of `time_tally` logic itself.
//!
//! The timed sections are empty, so the results show the cost of reading the clock and
//! updating the statistics, plus the cost of rendering durations and reports.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use time_tally::{Timer, TimerSet, humanize};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_tally_overhead");

    let mut timer = Timer::with_name("empty");
    group.bench_function("timer_start_stop_empty", |b| {
        b.iter(|| {
            timer.start().unwrap();
            black_box(());
            timer.stop().unwrap();
        });
    });

    let mut timers = TimerSet::new();
    for name in ["alpha", "beta", "gamma", "delta"] {
        timers.add(name).unwrap();
    }
    group.bench_function("timer_set_start_stop_empty", |b| {
        b.iter(|| {
            timers.start(black_box("gamma")).unwrap();
            timers.stop(black_box("gamma")).unwrap();
        });
    });

    group.bench_function("humanize_sub_second", |b| {
        b.iter(|| humanize(black_box(Duration::from_nanos(1_234_567))));
    });

    group.bench_function("humanize_hours", |b| {
        b.iter(|| humanize(black_box(Duration::from_nanos(365_000_123_456_789))));
    });

    group.bench_function("timer_set_report", |b| {
        b.iter(|| black_box(&timers).to_string());
    });

    group.finish();
}
