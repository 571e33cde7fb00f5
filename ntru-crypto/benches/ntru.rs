//! Benchmarks for NTRU key generation, encryption and decryption.
//!
//! Every operation runs over exact rational and big-integer arithmetic, so the cost is dominated by
//! the extended Euclidean inversion during key generation and by the schoolbook convolutions
//! during encryption and decryption. Each group is parameterized over a few ring degrees.
use std::{hint::black_box, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ntru_crypto::{IntPolynomial, Ntru, NtruParams, ntru::sample_ternary};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

// CONFIGURATION
// ================================================================================================

const PARAMETER_SETS: [(NtruParams, usize); 4] = [
    (ntru_crypto::DEMO_PARAMS, 2),
    (NtruParams::new(11, 3, 2048), 3),
    (NtruParams::new(31, 3, 4096), 5),
    (NtruParams::new(61, 3, 8192), 10),
];

const MEASUREMENT_TIME: Duration = Duration::from_secs(10);
const SAMPLE_SIZE: usize = 20;

// HELPERS
// ================================================================================================

/// Retries key generation with a seeded RNG until a sampled `f` turns out invertible.
fn key_holder(params: NtruParams, d: usize, rng: &mut ChaCha20Rng) -> Ntru {
    let mut ntru = Ntru::new(params);
    while ntru.generate_keys_with_rng(d, rng).is_err() {}
    ntru
}

fn random_message(params: NtruParams, rng: &mut ChaCha20Rng) -> IntPolynomial {
    let coefficients: Vec<i64> =
        (0..params.n()).map(|_| rng.random_range(0..params.p() as i64)).collect();
    IntPolynomial::from(coefficients)
}

// BENCHMARKS
// ================================================================================================

fn keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntru-keygen");
    group.measurement_time(MEASUREMENT_TIME).sample_size(SAMPLE_SIZE);

    for (params, d) in PARAMETER_SETS {
        let mut rng = ChaCha20Rng::from_seed([0_u8; 32]);
        group.bench_with_input(BenchmarkId::from_parameter(params.n()), &params, |b, params| {
            b.iter_batched(
                || {
                    let f = sample_ternary(params.n(), d + 1, d, &mut rng).unwrap();
                    let g = sample_ternary(params.n(), d, d, &mut rng).unwrap();
                    (Ntru::new(*params), f, g)
                },
                |(mut ntru, f, g)| {
                    let _ = black_box(ntru.generate_public_key(&f, &g, d));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntru-encrypt");
    group.measurement_time(MEASUREMENT_TIME).sample_size(SAMPLE_SIZE);

    for (params, d) in PARAMETER_SETS {
        let mut rng = ChaCha20Rng::from_seed([1_u8; 32]);
        let ntru = key_holder(params, d, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(params.n()), &params, |b, params| {
            b.iter_batched(
                || {
                    let message = random_message(*params, &mut rng);
                    let r = sample_ternary(params.n(), d, d, &mut rng).unwrap();
                    (message, r)
                },
                |(message, r)| ntru.encrypt(black_box(&message), black_box(&r)).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntru-decrypt");
    group.measurement_time(MEASUREMENT_TIME).sample_size(SAMPLE_SIZE);

    for (params, d) in PARAMETER_SETS {
        let mut rng = ChaCha20Rng::from_seed([2_u8; 32]);
        let ntru = key_holder(params, d, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(params.n()), &params, |b, params| {
            b.iter_batched(
                || {
                    let message = random_message(*params, &mut rng);
                    let r = sample_ternary(params.n(), d, d, &mut rng).unwrap();
                    ntru.encrypt(&message, &r).unwrap()
                },
                |ciphertext| ntru.decrypt(black_box(&ciphertext)).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(ntru_group, keygen, encrypt, decrypt);
criterion_main!(ntru_group);
