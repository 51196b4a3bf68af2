use crate::common::{configure_criterion, mixed_inputs, parse_amount, DomainError};
use criterion::{criterion_group, Criterion};
use result_rail::{partition_outcomes, Outcome};
use std::hint::black_box;

pub fn bench_collect_short_circuit(c: &mut Criterion) {
    let inputs = mixed_inputs();
    let mut group = c.benchmark_group("collect");

    group.bench_function("outcome_collect_mixed", |b| {
        b.iter(|| {
            let collected: Outcome<Vec<u64>, DomainError> =
                inputs.iter().map(|raw| parse_amount(raw)).collect();
            black_box(collected)
        })
    });

    group.bench_function("result_collect_mixed", |b| {
        b.iter(|| {
            let collected: Result<Vec<u64>, DomainError> = inputs
                .iter()
                .map(|raw| parse_amount(raw).into_result())
                .collect();
            black_box(collected)
        })
    });

    group.bench_function("partition_mixed", |b| {
        b.iter(|| black_box(partition_outcomes(inputs.iter().map(|raw| parse_amount(raw)))))
    });

    group.finish();
}

criterion_group! {
    name = collect_benches;
    config = configure_criterion();
    targets = bench_collect_short_circuit
}
