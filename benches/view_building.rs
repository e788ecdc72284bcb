use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dashboard_core::core::services::{DashboardOptions, DashboardService, SpendingService};
use dashboard_core::domain::{CategorySpending, DashboardAggregate, ThemeMode};

fn wide_aggregate(category_count: usize) -> DashboardAggregate {
    let mut aggregate = DashboardAggregate::sample();
    aggregate.spending_by_category = (0..category_count)
        .map(|idx| CategorySpending::new(format!("CATEGORY_{idx}"), 10.0 + (idx % 97) as f64))
        .collect();
    aggregate
}

fn bench_build_view(c: &mut Criterion) {
    let sample = DashboardAggregate::sample();
    let options = DashboardOptions::default();
    c.bench_function("build_view_sample", |b| {
        b.iter(|| DashboardService::build_view(black_box(&sample), black_box(&options)))
    });

    let wide = wide_aggregate(500);
    let dark = DashboardOptions {
        theme: ThemeMode::Dark,
        ..DashboardOptions::default()
    };
    c.bench_function("build_view_500_categories", |b| {
        b.iter(|| DashboardService::build_view(black_box(&wide), black_box(&dark)))
    });
}

fn bench_category_shares(c: &mut Criterion) {
    let wide = wide_aggregate(5_000);
    c.bench_function("category_shares_5000", |b| {
        b.iter(|| SpendingService::category_shares(black_box(&wide.spending_by_category)))
    });
}

criterion_group!(benches, bench_build_view, bench_category_shares);
criterion_main!(benches);
