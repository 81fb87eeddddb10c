use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use miniapp::api::{parse, parse_query, safe_try, HapticFeedback, ImpactStyle, RawInitData};
use miniapp::query::parse_query_string;
use serde_json::json;
use std::hint::black_box;
use std::time::Duration;

const LAUNCH_QUERY: &str = "query_id=AAHdF6IQAAAAAN0XohDhrOrc\
&user=%7B%22id%22%3A279058397%2C%22first_name%22%3A%22Vladislav%22%2C%22language_code%22%3A%22ru%22%7D\
&auth_date=1662771648&hash=c501b71e775f74ce10e377dea85a7ea24ecd640b223ea86dfe453e0eaed2e2b2";

fn benchmark_query_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_decoding");
    group.measurement_time(Duration::from_secs(10));

    // Padding with unknown keys shows the cost of the allow-list drop
    for extra in [0usize, 10, 100].iter() {
        let mut query = LAUNCH_QUERY.to_string();
        for i in 0..*extra {
            query.push_str(&format!("&extra_{}=value", i));
        }

        group.bench_with_input(BenchmarkId::new("parse_query", extra), &query, |b, query| {
            b.iter(|| {
                let result = parse_query(black_box(query));
                black_box(result)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("parse_query_string", extra),
            &query,
            |b, query| {
                b.iter(|| black_box(parse_query_string(black_box(query))));
            },
        );
    }

    group.finish();
}

fn benchmark_raw_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_parse");

    let raw = RawInitData::try_from(json!({
        "auth_date": 1662771648,
        "hash": "abcd",
        "chat": {"id": -100, "type": "supergroup", "title": "Chat"},
        "user": {"id": 279058397, "first_name": "Vladislav", "is_premium": true},
        "receiver": {"id": 1, "first_name": "Bot", "is_bot": true}
    }))
    .expect("fixture is an object");

    group.bench_function("parse_nested", |b| {
        b.iter(|| black_box(parse(black_box(&raw))));
    });

    group.bench_function("safe_try_parse", |b| {
        b.iter(|| black_box(safe_try(|| parse(black_box(&raw)))));
    });

    group.finish();
}

fn benchmark_haptic(c: &mut Criterion) {
    c.bench_function("haptic_event_params", |b| {
        let event = HapticFeedback::impact(ImpactStyle::Medium);
        b.iter(|| black_box(black_box(event).event_params()));
    });
}

criterion_group!(
    benches,
    benchmark_query_decoding,
    benchmark_raw_parse,
    benchmark_haptic
);
criterion_main!(benches);
