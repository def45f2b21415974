use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::json;

use dpk::{DeriverConfig, PartitionKeyDeriver};

fn criterion_benchmark(c: &mut Criterion) {
    let deriver = PartitionKeyDeriver::default();

    let mut group = c.benchmark_group("derive");
    group.throughput(Throughput::Elements(1));

    group.bench_function("absent", |b| b.iter(|| deriver.derive(black_box(None))));

    let explicit = json!({"partitionKey": {"tenant": "acme", "region": "eu"}, "payload": "x"});
    group.bench_function("explicit_key", |b| {
        b.iter(|| deriver.derive(black_box(Some(&explicit))))
    });

    let event = json!({
        "orderId": 7,
        "customer": {"id": "c-42", "tier": "gold"},
        "items": [{"sku": "a-1", "quantity": 2}, {"sku": "b-7", "quantity": 1}],
    });
    group.bench_function("digest", |b| {
        b.iter(|| deriver.derive(black_box(Some(&event))))
    });

    let mut config = DeriverConfig::default();
    config.max_partition_key_length(64);
    let rehashing = config.to_deriver().unwrap();
    group.bench_function("digest_rehash", |b| {
        b.iter(|| rehashing.derive(black_box(Some(&event))))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
