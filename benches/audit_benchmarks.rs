//! Performance benchmarks for the roster audit engine.
//!
//! This benchmark suite verifies that the audit pipeline meets
//! performance targets:
//! - Single-file audit (50 staff rows): < 1ms mean
//! - Full-year batch (12 files, 500 rows each): < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use roster_audit::api::{create_router, AppState};
use roster_audit::config::ConfigLoader;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/roster").expect("Failed to load config");
    AppState::new(config)
}

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Creates one roster file with a summary sheet and `row_count` staff rows.
///
/// Every third row carries a vacation remark so the extractor does real
/// work; one row in twenty carries a lone date to exercise the exception
/// path.
fn create_roster_file(month_index: usize, row_count: usize) -> serde_json::Value {
    let month = MONTHS[month_index % 12];
    let mut rows = vec![serde_json::json!(["MRN", "NAME", "WARD", "COMMENTS"])];
    for i in 0..row_count {
        let comments = if i % 20 == 19 {
            format!("resigned {:02}/{:02}/2025", (i % 27) + 1, month_index + 1)
        } else if i % 3 == 0 {
            format!(
                "AL {:02}/{:02}/2025-{:02}/{:02}/2025",
                (i % 20) + 1,
                month_index + 1,
                (i % 20) + 5,
                month_index + 1
            )
        } else {
            String::new()
        };
        rows.push(serde_json::json!([
            format!("MRN-{:04}", i),
            format!("Employee {:04}", i),
            format!("Ward {}", i % 8),
            comments
        ]));
    }

    serde_json::json!({
        "file_name": format!("DUTY ROSTER {} 2025.xlsx", month),
        "sheets": [
            {
                "name": "Table 1",
                "rows": [
                    ["Department", "ACTUAL ON SITE", "USED VACATION"],
                    ["TOTAL=", 500, 470]
                ]
            },
            { "name": "Staff", "rows": rows }
        ]
    })
}

/// Creates an audit request covering `file_count` months.
fn create_request(file_count: usize, rows_per_file: usize) -> String {
    let files: Vec<serde_json::Value> = (0..file_count)
        .map(|i| create_roster_file(i, rows_per_file))
        .collect();
    serde_json::json!({ "files": files }).to_string()
}

/// Benchmark: single roster file with 50 staff rows.
///
/// Target: < 1ms mean
fn bench_single_file(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request(1, 50);

    c.bench_function("single_file_50_rows", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/audit")
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

/// Benchmark: full-year batch of 12 monthly files, 500 rows each.
///
/// Target: < 50ms mean
fn bench_full_year(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request(12, 500);

    let mut group = c.benchmark_group("full_year");
    group.throughput(Throughput::Elements(12));
    group.sample_size(20);

    group.bench_function("twelve_files_500_rows", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/audit")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

/// Benchmark: various row counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("scaling");

    for row_count in [10, 50, 200, 1000].iter() {
        let router = create_router(state.clone());
        let body = create_request(1, *row_count);

        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(BenchmarkId::new("rows", row_count), row_count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/audit")
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

    group.finish();
}

criterion_group!(benches, bench_single_file, bench_full_year, bench_scaling);
criterion_main!(benches);
