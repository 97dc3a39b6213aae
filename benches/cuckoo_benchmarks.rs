use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use cuckoo_table::{CuckooTable, Error};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SEED: u64 = 42;

/// Builds a table holding `count` distinct keys, growing on cycles the way a
/// caller would.
fn populated_table(count: usize) -> (CuckooTable, Vec<u64>) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut table = CuckooTable::new();
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let key = rng.gen_range(0..1_000_000u64);
        loop {
            match table.insert(key) {
                Ok(()) => {
                    keys.push(key);
                    break;
                }
                Err(Error::DuplicateKey(_)) => break,
                _ => {
                    table.rehash();
                }
            }
        }
    }
    (table, keys)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert_1000_with_growth", |b| {
        let mut rng = StdRng::seed_from_u64(SEED);
        let keys: Vec<u64> = (0..1000).map(|_| rng.gen_range(0..1_000_000u64)).collect();
        b.iter_batched(
            CuckooTable::new,
            |mut table| {
                for &key in &keys {
                    loop {
                        match table.insert(key) {
                            Ok(()) => break,
                            Err(Error::DuplicateKey(_)) => break,
                            _ => {
                                table.rehash();
                            }
                        }
                    }
                }
                table
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_lookup(c: &mut Criterion) {
    let (table, keys) = populated_table(1000);
    c.bench_function("lookup_hit", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = keys[i % keys.len()];
            i += 1;
            black_box(table.lookup(black_box(key)))
        });
    });
    c.bench_function("lookup_miss", |b| {
        b.iter(|| black_box(table.lookup(black_box(u64::MAX))));
    });
}

fn bench_rehash(c: &mut Criterion) {
    let (table, _) = populated_table(1000);
    c.bench_function("rehash_1000_keys", |b| {
        b.iter_batched(
            || table.clone(),
            |mut table| {
                black_box(table.rehash());
                table
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_insert, bench_lookup, bench_rehash);
criterion_main!(benches);
