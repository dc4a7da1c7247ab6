use criterion::{black_box, criterion_group, criterion_main, Criterion};

use churn_eda::{Column, MissingPolicy, SummaryConfig, Table, TableSummarizer};

fn customers(rows: usize) -> Table {
    let tenure: Vec<i64> = (0..rows).map(|i| (i % 73) as i64).collect();
    let monthly: Vec<f64> = (0..rows).map(|i| 18.25 + (i % 100) as f64 * 1.01).collect();
    let total: Vec<Option<f64>> = (0..rows)
        .map(|i| if i % 50 == 0 { None } else { Some(i as f64 * 3.5) })
        .collect();
    let churn: Vec<&str> = (0..rows).map(|i| if i % 4 == 0 { "Yes" } else { "No" }).collect();

    Table::new()
        .with_column("tenure", Column::numeric(tenure))
        .and_then(|t| t.with_column("MonthlyCharges", Column::numeric(monthly)))
        .and_then(|t| t.with_column("TotalCharges", Column::numeric_opt(total)))
        .and_then(|t| t.with_column("Churn", Column::categorical(churn)))
        .unwrap()
}

fn bench_numeric(c: &mut Criterion) {
    let table = customers(100_000);
    let mut group = c.benchmark_group("summarize_numeric");

    for (name, policy) in [
        ("drop", MissingPolicy::Drop),
        ("fill", MissingPolicy::Fill),
        ("ignore", MissingPolicy::Ignore),
    ] {
        let summarizer = TableSummarizer::with_config(SummaryConfig::default().with_missing_policy(policy));
        group.bench_function(name, |b| {
            b.iter(|| summarizer.summarize_numeric(black_box(&table), None).unwrap())
        });
    }

    let parallel = TableSummarizer::with_config(SummaryConfig::default().with_parallel(true));
    group.bench_function("drop_parallel", |b| {
        b.iter(|| parallel.summarize_numeric(black_box(&table), None).unwrap())
    });

    group.finish();
}

fn bench_distribution(c: &mut Criterion) {
    let table = customers(100_000);
    let summarizer = TableSummarizer::new();

    c.bench_function("summarize_distribution", |b| {
        b.iter(|| summarizer.summarize_distribution(black_box(&table), "Churn").unwrap())
    });
    c.bench_function("segment_tenure_column", |b| {
        b.iter(|| summarizer.segment_tenure_column(black_box(&table), "tenure").unwrap())
    });
}

criterion_group!(benches, bench_numeric, bench_distribution);
criterion_main!(benches);
