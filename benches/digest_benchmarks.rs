use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cryptobench::spec::digest;
use cryptobench::{data, install_alternate_provider, DigestSession, PRODUCTS};

fn benchmark_digest(c: &mut Criterion) {
    install_alternate_provider();
    let mut group = c.benchmark_group("digest");
    group.throughput(Throughput::Bytes(data::DATA_1MB.len() as u64));

    for product in PRODUCTS {
        for algorithm in digest::CATALOG {
            let mut session = DigestSession::new(product, algorithm, data::DATA_1MB.as_slice());
            session.setup().expect("digest setup");
            group.bench_function(BenchmarkId::new(product.name(), algorithm.name()), |b| {
                b.iter(|| black_box(session.execute().unwrap()));
            });
        }
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_digest
);
criterion_main!(benches);
