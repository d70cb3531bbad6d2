// Benchmark for the year progress calculation
// Measures the per-tick cost of recomputing progress for a selected date

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use year_progress::services::clock::FixedClock;
use year_progress::services::progress::year_progress;
use year_progress::services::refresh::{ProgressDisplay, RefreshLoop};
use year_progress::models::progress::ProgressState;

struct NullDisplay;

impl ProgressDisplay for NullDisplay {
    fn show_progress(&mut self, state: ProgressState) {
        black_box(state);
    }

    fn show_time(&mut self, time: String) {
        black_box(time);
    }
}

fn bench_year_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("year_progress");

    for (label, date) in [
        ("new_years_day", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
        ("mid_leap_year", NaiveDate::from_ymd_opt(2024, 7, 2).unwrap()),
        ("new_years_eve", NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &date, |b, &date| {
            b.iter(|| year_progress(black_box(date)));
        });
    }

    group.finish();
}

fn bench_refresh_tick(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 7, 2)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap();
    let refresh = RefreshLoop::new(FixedClock(now), Duration::from_millis(100));
    let selected = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
    let mut display = NullDisplay;

    c.bench_function("refresh_tick", |b| {
        b.iter(|| refresh.refresh(black_box(selected), &mut display));
    });
}

criterion_group!(benches, bench_year_progress, bench_refresh_tick);
criterion_main!(benches);
