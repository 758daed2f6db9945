use core::hash::Hash;
use core::hint::black_box;

use chain_hash::Config;
use chain_hash::HashTable as ChainHashTable;
use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownMap;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::distr;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;

trait TestKey: Clone + Hash + Eq {
    fn new(key: u64) -> Self;
}

#[derive(Clone, Hash, PartialEq, Eq)]
struct SmallKey(u64);

impl TestKey for SmallKey {
    fn new(key: u64) -> Self {
        black_box(Self(key))
    }
}

#[derive(Clone, Hash, PartialEq, Eq)]
struct StringKey(String);

impl TestKey for StringKey {
    fn new(key: u64) -> Self {
        black_box(Self(format!("key_{:016X}", key)))
    }
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 12),
    (1 << 14),
    (1 << 16),
    (1 << 18),
];

fn random_keys<Key: TestKey>(count: usize) -> Vec<Key> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| Key::new(rng.try_next_u64().unwrap()))
        .collect()
}

fn bench_insert_random<Key: TestKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_random_{}",
        core::any::type_name::<Key>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<Key>(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut table = ChainHashTable::with_capacity(1);
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(table.insert(key, i));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut table = HashbrownMap::with_capacity(0);
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(table.insert(key, i));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut table = std::collections::HashMap::with_capacity(0);
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(table.insert(key, i));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_insert_load_factors<Key: TestKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_load_factor_{}",
        core::any::type_name::<Key>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<Key>(size);
        group.throughput(Throughput::Elements(size as u64));

        for load_factor in [0.5, 0.75, 0.9, 2.0] {
            let config = Config::default().with_capacity(1).with_load_factor(load_factor);
            group.bench_function(format!("lf_{load_factor}/{size}"), |b| {
                b.iter_batched(
                    || keys.clone(),
                    |keys| {
                        let mut table = ChainHashTable::with_config(config).unwrap();
                        for (i, key) in keys.into_iter().enumerate() {
                            black_box(table.insert(key, i));
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_find_hit<Key: TestKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_hit_{}", core::any::type_name::<Key>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<Key>(size);
        let mut probes = keys.clone();
        probes.shuffle(&mut SmallRng::from_os_rng());

        let chain: ChainHashTable<Key, usize> =
            keys.iter().cloned().enumerate().map(|(i, k)| (k, i)).collect();
        let hashbrown: HashbrownMap<Key, usize> =
            keys.iter().cloned().enumerate().map(|(i, k)| (k, i)).collect();
        let std_map: std::collections::HashMap<Key, usize> =
            keys.iter().cloned().enumerate().map(|(i, k)| (k, i)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                for key in &probes {
                    black_box(chain.get(key));
                }
            })
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in &probes {
                    black_box(hashbrown.get(key));
                }
            })
        });
        group.bench_function(format!("std/{size}"), |b| {
            b.iter(|| {
                for key in &probes {
                    black_box(std_map.get(key));
                }
            })
        });
    }

    group.finish();
}

#[derive(Clone, Copy)]
enum Operation {
    Find,
    Insert,
}

const KEY_SPACE_MULTIPLIER: usize = 2;

fn bench_mixed_zipf<Key: TestKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("mixed_zipf_{}", core::any::type_name::<Key>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let mut rng = SmallRng::from_os_rng();
        let operations = (0..size * 3)
            .map(|_| {
                let op_choice: f64 = rng.sample(distr::Uniform::new(0.0, 1.0).unwrap());
                if op_choice < 0.75 {
                    Operation::Find
                } else {
                    Operation::Insert
                }
            })
            .collect::<Vec<Operation>>();

        let key_distr = Zipf::new((size * KEY_SPACE_MULTIPLIER) as f64, 1.0).unwrap();
        let keys = operations
            .iter()
            .map(|op| (*op, Key::new(rng.sample(key_distr) as u64)))
            .collect::<Vec<(Operation, Key)>>();

        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut table = ChainHashTable::new();
                    for (operation, key) in keys {
                        match operation {
                            Operation::Find => {
                                black_box(table.get(&key));
                            }
                            Operation::Insert => {
                                *table.entry(key).or_insert(0usize) += 1;
                            }
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut table = HashbrownMap::new();
                    for (operation, key) in keys {
                        match operation {
                            Operation::Find => {
                                black_box(table.get(&key));
                            }
                            Operation::Insert => {
                                *table.entry(key).or_insert(0usize) += 1;
                            }
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random::<SmallKey, 4>,
    bench_insert_random::<StringKey, 3>,
    bench_insert_load_factors::<SmallKey, 3>,
    bench_find_hit::<SmallKey, 4>,
    bench_find_hit::<StringKey, 3>,
    bench_mixed_zipf::<SmallKey, 3>,
    bench_mixed_zipf::<StringKey, 2>,
);

criterion_main!(benches);
