//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elo_ledger::config::{EloConfig, SchemaConfig};
use elo_ledger::processor::MatchProcessor;
use elo_ledger::rating::EloCalculator;
use elo_ledger::types::ContestRecord;

fn bench_rating_update(c: &mut Criterion) {
    let calculator = EloCalculator::new(EloConfig::default()).unwrap();

    c.bench_function("rate_single_contest", |b| {
        b.iter(|| calculator.rate(black_box(1010.0), black_box(1000.0), black_box(1.0)))
    });
}

fn bench_process_matches(c: &mut Criterion) {
    let records: Vec<ContestRecord> = (0..1000)
        .map(|i| {
            ContestRecord::new()
                .with_field("winner_id", format!("participant-{}", i % 50))
                .with_field("loser_id", format!("participant-{}", (i + 1) % 50))
        })
        .collect();

    c.bench_function("process_1000_contests", |b| {
        b.iter(|| {
            let mut processor =
                MatchProcessor::new(SchemaConfig::default(), EloConfig::default()).unwrap();
            processor.process_matches(black_box(&records)).unwrap()
        })
    });
}

criterion_group!(benches, bench_rating_update, bench_process_matches);
criterion_main!(benches);
