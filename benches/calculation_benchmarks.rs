//! Performance benchmarks for the parking charge calculator.
//!
//! Covers the pure calculator for short and long stays of increasing length,
//! and a full request through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use parking_calculator::api::{AppState, create_router};
use parking_calculator::calculation::calculate_charge;
use parking_calculator::config::TariffConfig;
use parking_calculator::models::ChargeType;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn arrival() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2020-12-07 16:50:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

fn bench_calculate_charge(c: &mut Criterion) {
    let tariff = TariffConfig::default();
    let mut group = c.benchmark_group("calculate_charge");

    for days in [0i64, 1, 7, 30, 365] {
        let departure = arrival() + Duration::days(days) + Duration::hours(3);

        group.bench_with_input(BenchmarkId::new("short", days), &departure, |b, &departure| {
            b.iter(|| {
                calculate_charge(
                    black_box(arrival()),
                    black_box(departure),
                    ChargeType::Short,
                    &tariff,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("long", days), &departure, |b, &departure| {
            b.iter(|| {
                calculate_charge(
                    black_box(arrival()),
                    black_box(departure),
                    ChargeType::Long,
                    &tariff,
                )
            })
        });
    }

    group.finish();
}

fn bench_api_request(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(TariffConfig::default()));
    let body = serde_json::json!({
        "arrival": "2017-09-07T16:50:00",
        "departure": "2017-09-09T20:15:00",
        "charge_type": "short"
    })
    .to_string();

    c.bench_function("api_calculate_short_stay", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap()
            }
        })
    });
}

criterion_group!(benches, bench_calculate_charge, bench_api_request);
criterion_main!(benches);
