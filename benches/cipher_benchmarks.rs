use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cryptobench::spec::cipher;
use cryptobench::{
    data, install_alternate_provider, CipherSession, Direction, ProductSelector, PRODUCTS,
};

fn encrypt_session(product: ProductSelector, transformation: &str) -> CipherSession {
    let spec = transformation.parse().expect("catalog transformation");
    let mut session =
        CipherSession::new(product, spec, Direction::Encrypt, data::DATA_1MB.as_slice());
    session.setup().expect("cipher setup");
    session
}

fn decrypt_session(product: ProductSelector, transformation: &str) -> CipherSession {
    let spec = transformation.parse().expect("catalog transformation");
    let mut session =
        CipherSession::new(product, spec, Direction::Decrypt, data::DATA_1MB.as_slice());
    session.setup().expect("cipher setup");
    session
}

fn benchmark_encrypt(c: &mut Criterion) {
    install_alternate_provider();
    let mut group = c.benchmark_group("cipher_encrypt");
    group.throughput(Throughput::Bytes(data::DATA_1MB.len() as u64));

    for product in PRODUCTS {
        for transformation in cipher::CATALOG {
            let mut session = encrypt_session(product, transformation);
            group.bench_function(BenchmarkId::new(product.name(), transformation), |b| {
                b.iter(|| black_box(session.execute().unwrap()));
            });
        }
    }

    group.finish();
}

fn benchmark_decrypt(c: &mut Criterion) {
    install_alternate_provider();
    let mut group = c.benchmark_group("cipher_decrypt");
    group.throughput(Throughput::Bytes(data::DATA_1MB.len() as u64));

    for product in PRODUCTS {
        for transformation in cipher::CATALOG {
            let mut session = decrypt_session(product, transformation);
            group.bench_function(BenchmarkId::new(product.name(), transformation), |b| {
                b.iter(|| black_box(session.execute().unwrap()));
            });
        }
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_encrypt, benchmark_decrypt
);
criterion_main!(benches);
