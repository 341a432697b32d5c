//! # Key Derivation Benchmarks
//!
//! | Path | Dominant cost |
//! |------|---------------|
//! | Seed generation | PBKDF2-HMAC-SHA512, 2048 rounds |
//! | eth_secp256k1 | seed + one HMAC-SHA512 |
//! | secp256k1 | seed + one HMAC-SHA512 per path level |
//! | Registry resolve | tag lookup |

use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use key_derivation::{
    bip44_path, generate_seed, AlgorithmRegistry, AlgorithmTag, KeyDerivationApi, KeyringConfig,
    KeyringService, DEFAULT_ETH_HD_PATH, ETH_COIN_TYPE,
};

const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

// ============================================================================
// Seed generation
// ============================================================================

fn bench_seed_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("bip39_to_seed", |b| {
        b.iter(|| black_box(generate_seed(black_box(TEST_MNEMONIC), "").unwrap()))
    });

    group.finish();
}

// ============================================================================
// Strategies
// ============================================================================

fn bench_strategies(c: &mut Criterion) {
    let service = KeyringService::new(
        Arc::new(AlgorithmRegistry::ethermint()),
        KeyringConfig::default(),
    )
    .unwrap();

    let mut group = c.benchmark_group("derive_key");
    group.measurement_time(Duration::from_secs(10));

    for tag in [AlgorithmTag::ETH_SECP256K1, AlgorithmTag::SECP256K1] {
        group.bench_with_input(BenchmarkId::new("algorithm", tag.as_str()), &tag, |b, tag| {
            b.iter(|| {
                black_box(
                    service
                        .derive_key(TEST_MNEMONIC, "", DEFAULT_ETH_HD_PATH, tag)
                        .unwrap(),
                )
            })
        });
    }

    // Standard strategy cost by path depth
    for depth in [1usize, 3, 5] {
        let path = match depth {
            1 => "m/44'".to_string(),
            3 => "m/44'/60'/0'".to_string(),
            _ => bip44_path(ETH_COIN_TYPE, 0, 0),
        };
        group.bench_with_input(BenchmarkId::new("secp256k1_depth", depth), &path, |b, path| {
            b.iter(|| {
                black_box(
                    service
                        .derive_key(TEST_MNEMONIC, "", path, &AlgorithmTag::SECP256K1)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

// ============================================================================
// Registry
// ============================================================================

fn bench_registry_resolve(c: &mut Criterion) {
    let registry = AlgorithmRegistry::ethermint();
    let unknown = AlgorithmTag::new("ed25519");

    let mut group = c.benchmark_group("registry");

    group.bench_function("resolve_hit", |b| {
        b.iter(|| black_box(registry.resolve(black_box(&AlgorithmTag::SECP256K1)).is_ok()))
    });
    group.bench_function("resolve_miss", |b| {
        b.iter(|| black_box(registry.resolve(black_box(&unknown)).is_err()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_seed_generation,
    bench_strategies,
    bench_registry_resolve
);
criterion_main!(benches);
