use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use treesplit::{build, BuildConfig, MeanSplit, MidpointSplit};

const SEED: u64 = 0;
const N: usize = 10000;

fn benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("build");
    group.sample_size(10);

    group.bench_function("Midpoint", |b| b.iter(bench_midpoint));
    group.bench_function("Mean", |b| b.iter(bench_mean));
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

fn bench_midpoint() {
    let dataset = treesplit::Dataset::new(dataset());
    let root = build::<2, MidpointSplit>(&dataset, &BuildConfig::default());
    assert_eq!(root.num_points(), N);
}

fn bench_mean() {
    let dataset = treesplit::Dataset::new(dataset());
    let root = build::<2, MeanSplit>(&dataset, &BuildConfig::default());
    assert_eq!(root.num_points(), N);
}

fn dataset() -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..N).map(|_| [rng.gen(), rng.gen()]).collect()
}
