//! Benchmarks for `TermLocationIndex`.
//!
//! # Benchmarks
//!
//! - **`insert`**: Builds an index from a synthetic corpus, one `insert` per
//!   (word, file, position) triple.
//! - **`positions_of`**: Looks up the positions of every (word, file) pair of
//!   the corpus in a prebuilt index.
//! - **`terms_with_prefix`**: Runs short and long prefix queries against a
//!   prebuilt index.
//!
//! # Test Data
//!
//! The corpus is generated deterministically: `FILES` files of
//! `WORDS_PER_FILE` words drawn from a vocabulary of `VOCABULARY` words, so
//! every run measures the same input.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench index
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use termloc_core::TermLocationIndex;

const FILES: usize = 16;
const WORDS_PER_FILE: usize = 2_000;
const VOCABULARY: usize = 1_500;

type Corpus = Vec<(String, String, usize)>;

fn corpus() -> Corpus {
    let mut triples = Vec::with_capacity(FILES * WORDS_PER_FILE);
    for file in 0..FILES {
        let location = format!("doc{file}.txt");
        for position in 0..WORDS_PER_FILE {
            let word = (file * 7919 + position * 104_729) % VOCABULARY;
            triples.push((format!("word{word:04}"), location.clone(), position));
        }
    }
    triples
}

fn bench_insert(c: &mut Criterion) {
    let corpus = corpus();
    c.bench_function("insert", |b| {
        b.iter_batched(
            || corpus.clone(),
            |corpus| {
                let mut index = TermLocationIndex::new();
                for (term, location, position) in corpus {
                    index.insert(term, location, position);
                }
                index
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_positions_of(c: &mut Criterion) {
    let corpus = corpus();
    let index = corpus.iter().cloned().collect::<TermLocationIndex<_, _, _>>();
    c.bench_function("positions_of", |b| {
        b.iter(|| {
            corpus
                .iter()
                .filter_map(|(term, location, _)| {
                    index.positions_of(hint::black_box(term), hint::black_box(location))
                })
                .map(<[usize]>::len)
                .sum::<usize>()
        });
    });
}

fn bench_terms_with_prefix(c: &mut Criterion) {
    let index = corpus().into_iter().collect::<TermLocationIndex<_, _, _>>();
    for query in ["w", "WORD0", "word1499"] {
        c.bench_with_input(
            BenchmarkId::new("terms_with_prefix", query),
            query,
            |b, query| {
                b.iter(|| index.terms_with_prefix(hint::black_box(query)).len());
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_insert,
        bench_positions_of,
        bench_terms_with_prefix
);
criterion_main!(benches);
