// Performance benchmarks for relatix training, queries, and full passes
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relatix_core::{Document, Item, MemoryStore, Options, Recommender, SimilarityEngine};
use relatix_engine::TfIdfEngine;

const WORDS: &[&str] = &[
    "cats", "dogs", "cars", "rust", "systems", "gardening", "music", "coffee", "trains",
    "mountains", "rivers", "painting", "chess", "cooking", "running", "films",
];

fn generate_content(rng: &mut StdRng) -> String {
    (0..20)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_documents(count: usize) -> Vec<Document> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..count)
        .map(|i| Document::new(format!("doc{}", i), generate_content(&mut rng)))
        .collect()
}

fn benchmark_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("train");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("tfidf", size), size, |b, &size| {
            let documents = generate_documents(size);
            b.iter(|| {
                let mut engine = TfIdfEngine::new();
                engine.train(black_box(documents.clone()));
            });
        });
    }

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    let mut engine = TfIdfEngine::new();
    engine.train(generate_documents(10000));

    group.bench_function("tfidf_query", |b| {
        b.iter(|| {
            let results = engine.query(black_box("doc42"), 0.01, 10);
            black_box(results);
        });
    });

    group.finish();
}

fn benchmark_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pass");
    group.sample_size(10);

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("relatix", size), size, |b, &size| {
            let mut content_rng = StdRng::seed_from_u64(7);
            let items: Vec<Item> = (0..size)
                .map(|i| {
                    Item::new(format!("p{}", i))
                        .with_field("body", generate_content(&mut content_rng))
                })
                .collect();

            let mut options = Options::new("Post", "body");
            options.fill_with_random = true;
            let recommender = Recommender::new(options).unwrap();

            b.iter(|| {
                let store = MemoryStore::new();
                store.insert_collection("Post", items.clone());
                let mut engine = TfIdfEngine::new();
                let mut rng = StdRng::seed_from_u64(0);
                let summary = recommender
                    .run(&store, &mut engine, &store, &mut rng)
                    .unwrap();
                black_box(summary);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_train, benchmark_query, benchmark_full_pass);
criterion_main!(benches);
