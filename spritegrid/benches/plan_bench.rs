use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::RgbaImage;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use spritegrid::{SourceImage, plan};

fn random_images(count: usize, seed: u64) -> Vec<SourceImage> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let (w, h) = (rng.gen_range(1..=64), rng.gen_range(1..=64));
            SourceImage::new(format!("sprite_{i:05}"), RgbaImage::new(w, h))
        })
        .collect()
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    for count in [16, 256, 4096] {
        let images = random_images(count, 7);
        group.bench_with_input(BenchmarkId::from_parameter(count), &images, |b, images| {
            b.iter(|| plan(black_box(images)).map(|p| p.canvas_size()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
