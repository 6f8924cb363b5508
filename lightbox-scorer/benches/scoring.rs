//! Benchmarks for scoring and ranking catalogue-sized image sets.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lightbox_core::{EngagementCounts, ImageRecord, PopularityScorer, Role};
use lightbox_scorer::{EngagementScorer, rank_by_popularity};

fn catalogue(size: u64) -> Vec<ImageRecord> {
    (0..size)
        .map(|index| {
            ImageRecord::new(format!("img-{index:05}"))
                .expect("generated ids are non-empty")
                .with_engagement(EngagementCounts::new(
                    index * 37 % 5_000,
                    index * 13 % 400,
                    index * 7 % 120,
                ))
        })
        .collect()
}

fn bench_single_score(c: &mut Criterion) {
    let scorer = EngagementScorer::default();
    let engagement = EngagementCounts::new(1500, 150, 100);
    c.bench_function("score_single_image", |b| {
        b.iter(|| scorer.score(black_box(&engagement), black_box(Role::Premium)));
    });
}

fn bench_rank_catalogue(c: &mut Criterion) {
    let scorer = EngagementScorer::default();
    let images = catalogue(512);
    c.bench_function("rank_512_images", |b| {
        b.iter(|| rank_by_popularity(black_box(images.clone()), &scorer, Role::Guest));
    });
}

criterion_group!(benches, bench_single_score, bench_rank_catalogue);
criterion_main!(benches);
