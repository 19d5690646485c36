use core::time::Duration;

use criterion::{criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration};
use lazysorted::LazySorted;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn gen_shuffled_ints(count: usize) -> Vec<i32> {
    let mut vec: Vec<i32> = (0..count as i32).collect();
    vec.shuffle(&mut ChaCha8Rng::seed_from_u64(1));
    assert_eq!(vec.len(), count);
    vec
}

fn median_via_full_sort(items: &mut Vec<i32>) -> i32 {
    items.sort_unstable();
    items[items.len() / 2]
}

fn median_via_lazy(items: Vec<i32>) -> i32 {
    let mid = (items.len() / 2) as isize;
    let mut seq = LazySorted::with_seed(items, 1);
    *seq.get(mid).unwrap()
}

fn deciles_via_lazy(items: Vec<i32>) -> i32 {
    let n = items.len();
    let mut seq = LazySorted::with_seed(items, 1);
    let mut acc = 0;
    for i in 0..10 {
        acc += *seq.get((n * i / 10) as isize).unwrap();
    }
    acc
}

fn deciles_via_full_sort(items: &mut Vec<i32>) -> i32 {
    items.sort_unstable();
    let n = items.len();
    (0..10).map(|i| items[n * i / 10]).sum()
}

fn bench(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);

    let mut g = c.benchmark_group("median");
    g.plot_config(plot_config.clone());
    for count in [1_000, 10_000, 100_000] {
        let items = gen_shuffled_ints(count);
        g.bench_with_input(BenchmarkId::new("full_sort", count), &count, |b, _i| {
            b.iter_batched_ref(
                || items.clone(),
                |i| median_via_full_sort(i),
                criterion::BatchSize::SmallInput,
            )
        });
        g.bench_with_input(BenchmarkId::new("lazysorted", count), &count, |b, _i| {
            b.iter_batched(
                || items.clone(),
                |i| median_via_lazy(i),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    g.finish();

    let mut g = c.benchmark_group("deciles");
    g.plot_config(plot_config);
    for count in [1_000, 10_000, 100_000] {
        let items = gen_shuffled_ints(count);
        g.bench_with_input(BenchmarkId::new("full_sort", count), &count, |b, _i| {
            b.iter_batched_ref(
                || items.clone(),
                |i| deciles_via_full_sort(i),
                criterion::BatchSize::SmallInput,
            )
        });
        g.bench_with_input(BenchmarkId::new("lazysorted", count), &count, |b, _i| {
            b.iter_batched(
                || items.clone(),
                |i| deciles_via_lazy(i),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    g.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(1))
        .warm_up_time(Duration::from_millis(100));
    targets = bench
);
criterion_main!(benches);
