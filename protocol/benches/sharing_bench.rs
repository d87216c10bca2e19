// Share generation, reconstruction, and prime generation benchmarks.
//
// Everything runs over a fixed 256-bit prime except the prime generation
// bench itself, so the numbers compare across runs.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shamir_protocol::config::FieldConfig;
use shamir_protocol::field::{inverse, FieldPrime};
use shamir_protocol::sharing::{generate_with_rng, reconstruct};

const P256: &str =
    "115792089237316195423570985008687907853269984665640564039457584007908834671663";

fn field() -> FieldPrime {
    P256.parse().expect("known prime")
}

fn bench_inverse(c: &mut Criterion) {
    let field = field();
    let a = BigUint::from(0xDEAD_BEEF_u64);

    c.bench_function("field/inverse_256", |b| {
        b.iter(|| inverse(&a, field.modulus()));
    });
}

fn bench_generate(c: &mut Criterion) {
    let field = field();
    let mut rng = StdRng::seed_from_u64(1);
    let mut group = c.benchmark_group("sharing/generate");

    for &(t, n) in &[(2usize, 3usize), (3, 5), (10, 20), (25, 50)] {
        group.throughput(Throughput::Elements(n as u64));
        let id = BenchmarkId::from_parameter(format!("{}of{}", t, n));
        group.bench_with_input(id, &(t, n), |b, &(t, n)| {
            b.iter(|| generate_with_rng(t, n, &field, &mut rng));
        });
    }

    group.finish();
}

fn bench_reconstruct(c: &mut Criterion) {
    let field = field();
    let mut rng = StdRng::seed_from_u64(2);
    let mut group = c.benchmark_group("sharing/reconstruct");

    for &t in &[2usize, 5, 10, 25, 50] {
        let (_, shares) = generate_with_rng(t, t, &field, &mut rng).expect("valid parameters");
        group.throughput(Throughput::Elements(t as u64));
        group.bench_with_input(BenchmarkId::from_parameter(t), &shares, |b, shares| {
            b.iter(|| reconstruct(shares, &field));
        });
    }

    group.finish();
}

fn bench_prime_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("field/generate_prime");
    group.sample_size(10);

    for &bits in &[128u64, 256] {
        let config = FieldConfig::with_bits(bits);
        let mut rng = StdRng::seed_from_u64(bits);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &config, |b, config| {
            b.iter(|| FieldPrime::generate(config, &mut rng));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_inverse,
    bench_generate,
    bench_reconstruct,
    bench_prime_generation
);
criterion_main!(benches);
