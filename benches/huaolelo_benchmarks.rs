//! Huaolelo Benchmarks
//!
//! Benchmarks for the prefix tree, implemented with Criterion.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

use huaolelo_lib::data_structures::PrefixTree;

/// Deterministic pseudo-words over a small alphabet, so prefixes are shared.
fn generate_words(count: usize) -> Vec<String> {
    let alphabet = b"aeiklmnopu";
    (0..count)
        .map(|i| {
            let mut n = i * 7919 + 13;
            let len = 3 + n % 8;
            (0..len)
                .map(|_| {
                    let symbol = alphabet[n % alphabet.len()] as char;
                    n /= alphabet.len();
                    n += i;
                    symbol
                })
                .collect()
        })
        .collect()
}

fn bench_prefix_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_tree");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000].iter() {
        let words = generate_words(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| {
                let mut tree = PrefixTree::new();
                for word in words {
                    tree.insert(black_box(word), word);
                }
                tree
            });
        });

        let tree: PrefixTree<'_, String> = words.iter().map(|w| (w.as_str(), w)).collect();

        group.bench_with_input(BenchmarkId::new("lookup", size), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(tree.lookup(black_box(word)));
                }
            });
        });

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("collect_with_prefix", size), &tree, |b, tree| {
            b.iter(|| black_box(tree.collect_with_prefix(black_box("ka"))));
        });

        group.bench_with_input(BenchmarkId::new("traverse_all", size), &tree, |b, tree| {
            b.iter(|| {
                let mut count = 0usize;
                tree.traverse_all(|_| count += 1);
                black_box(count)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prefix_tree);
criterion_main!(benches);
