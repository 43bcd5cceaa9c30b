use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use certtrack::aggregate::{monthly_expiry_buckets, stats_for};
use certtrack::cert::Certificate;
use certtrack::seed::seed_certificates;
use certtrack::status::classify;

fn fixture(n: usize) -> Vec<Certificate> {
    seed_certificates().into_iter().cycle().take(n).collect()
}

fn bench_classify(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2026, 2, 24).unwrap();
    let expiry = Some(NaiveDate::from_ymd_opt(2026, 5, 25).unwrap());

    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(expiry), black_box(now)))
    });
}

fn bench_stats(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2026, 2, 24).unwrap();
    let certs = fixture(1000);

    c.bench_function("stats_for_1k", |b| {
        b.iter(|| stats_for(black_box(&certs), black_box(now)))
    });
}

fn bench_buckets(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2026, 2, 24).unwrap();
    let certs = fixture(1000);

    c.bench_function("monthly_buckets_1k", |b| {
        b.iter(|| monthly_expiry_buckets(black_box(&certs), black_box(now), 6))
    });
}

criterion_group!(benches, bench_classify, bench_stats, bench_buckets);
criterion_main!(benches);
