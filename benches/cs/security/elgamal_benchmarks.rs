use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use elgamal::cs::security::{elgamal_decrypt, elgamal_encrypt, generate_keys, ElGamalKeyGenConfig};
use elgamal::cs::string::encode;
use elgamal::math::{is_prime, power_mod, PRIMALITY_ROUNDS};
use num_bigint_dig::{BigUint, RandBigInt};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_power_mod(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let mut group = c.benchmark_group("power_mod");
    for bits in [128usize, 512, 1024] {
        let base = rng.gen_biguint(bits);
        let exponent = rng.gen_biguint(bits);
        let modulus = rng.gen_biguint(bits) | BigUint::from(1u32);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, _| {
            b.iter(|| power_mod(black_box(&base), black_box(&exponent), black_box(&modulus)))
        });
    }
    group.finish();
}

fn bench_is_prime(c: &mut Criterion) {
    // 2^127 - 1
    let m127 = (BigUint::from(1u32) << 127usize) - BigUint::from(1u32);
    c.bench_function("is_prime M127", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        b.iter(|| is_prime(black_box(&m127), PRIMALITY_ROUNDS, &mut rng))
    });
}

fn bench_generate_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_keys");
    group.sample_size(10);
    for bits in [64usize, 128] {
        let config = ElGamalKeyGenConfig::new(bits);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &config, |b, config| {
            let mut rng = ChaCha20Rng::seed_from_u64(3);
            b.iter(|| generate_keys(black_box(config), &mut rng).expect("key generation failed"))
        });
    }
    group.finish();
}

fn bench_encrypt_decrypt(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let keypair =
        generate_keys(&ElGamalKeyGenConfig::new(128), &mut rng).expect("key generation failed");
    let message = encode("Hi Buckaroos!").expect("encoding failed");

    c.bench_function("encrypt 128", |b| {
        b.iter(|| elgamal_encrypt(&keypair.public, black_box(&message), &mut rng).expect("encryption failed"))
    });

    let ciphertext = elgamal_encrypt(&keypair.public, &message, &mut rng).expect("encryption failed");
    c.bench_function("decrypt 128", |b| {
        b.iter(|| elgamal_decrypt(&keypair.private, black_box(&ciphertext)))
    });
}

criterion_group!(
    benches,
    bench_power_mod,
    bench_is_prime,
    bench_generate_keys,
    bench_encrypt_decrypt
);
criterion_main!(benches);
