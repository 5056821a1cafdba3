//! Performance benchmarks for the overnight worktime engine.
//!
//! Multi-day intervals are decomposed in closed form, so the cost of a band
//! calculation should not grow with the number of days covered:
//! - Single overnight shift: < 1μs mean
//! - One-year interval: same order as a single shift
//! - Full HTTP round trip for /overnight: < 100μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use axum::{body::Body, http::Request};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tower::ServiceExt;

use overnight_worktime::api::{AppState, create_router};
use overnight_worktime::calculation::{
    BandKind, calculate_overnight, decompose, early_morning_seconds, late_night_seconds,
};
use overnight_worktime::config::{BandConfig, ConfigLoader};
use overnight_worktime::models::Interval;

fn at(date: (i32, u32, u32), hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Benchmark: one 22:00 to 05:00 shift through each band calculator.
fn bench_single_shift(c: &mut Criterion) {
    let start = at((2024, 1, 1), 22);
    let end = at((2024, 1, 2), 5);

    c.bench_function("late_night_single_shift", |b| {
        b.iter(|| late_night_seconds(black_box(start), black_box(end), 22).unwrap())
    });
    c.bench_function("early_morning_single_shift", |b| {
        b.iter(|| early_morning_seconds(black_box(start), black_box(end), 5).unwrap())
    });

    let interval = Interval::new(start, end).unwrap();
    let config = BandConfig::default();
    c.bench_function("overnight_single_shift", |b| {
        b.iter(|| calculate_overnight(black_box(&interval), &config).unwrap())
    });
}

/// Benchmark: decomposition cost as the interval widens.
///
/// Target: flat across day counts
fn bench_scaling(c: &mut Criterion) {
    let start = at((2024, 1, 1), 21);
    let mut group = c.benchmark_group("scaling");

    for days in [1i64, 7, 31, 365, 3650].iter() {
        let end = start + Duration::days(*days) + Duration::hours(2);
        group.bench_with_input(BenchmarkId::new("days", days), days, |b, _| {
            b.iter(|| decompose(black_box(start), black_box(end), 22, BandKind::LateNight).unwrap())
        });
    }

    group.finish();
}

/// Benchmark: a full /overnight request through the router.
///
/// Target: < 100μs mean
fn bench_api_overnight(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(ConfigLoader::with_defaults()));
    let body = serde_json::json!({
        "start": "2024-01-01 22:00:00",
        "end": "2024-01-02 05:00:00"
    })
    .to_string();

    c.bench_function("api_overnight", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/overnight")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_single_shift, bench_scaling, bench_api_overnight);
criterion_main!(benches);
