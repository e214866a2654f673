//! Benchmarks for the derived idea listing.
//!
//! The filtered, ranked and paginated view is recomputed on every frame, so
//! these measure it against a list larger than any real event produces.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fake::{Fake, Faker};
use swj_tui::api::Idea;
use swj_tui::state::{derive_page, filter_ideas, rank_by_votes};

fn ideas(count: usize) -> Vec<Idea> {
    (0..count)
        .map(|i| Idea {
            title: format!("Idea {}", i),
            votes: (0..i % 37).map(|v| v.to_string()).collect(),
            ..Faker.fake()
        })
        .collect()
}

fn bench_derive_page_no_search(c: &mut Criterion) {
    let ideas = ideas(500);
    c.bench_function("derive_page_no_search", |b| {
        b.iter(|| derive_page(black_box(&ideas), black_box(""), black_box(3)))
    });
}

fn bench_derive_page_with_search(c: &mut Criterion) {
    let ideas = ideas(500);
    c.bench_function("derive_page_with_search", |b| {
        b.iter(|| derive_page(black_box(&ideas), black_box("idea 1"), black_box(1)))
    });
}

fn bench_filter_then_rank(c: &mut Criterion) {
    let ideas = ideas(500);
    c.bench_function("filter_then_rank", |b| {
        b.iter(|| {
            let mut matched = filter_ideas(black_box(&ideas), black_box("IDEA"));
            rank_by_votes(&mut matched);
            matched.len()
        })
    });
}

criterion_group!(
    benches,
    bench_derive_page_no_search,
    bench_derive_page_with_search,
    bench_filter_then_rank
);
criterion_main!(benches);
