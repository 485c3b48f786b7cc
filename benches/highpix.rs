use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use highpix::{select_top_k, top_pixels, ImageView};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> Vec<u16> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFFFF;
            data.push(value as u16);
        }
    }
    data
}

fn sort_top_k(values: &[u16], k: usize) -> Vec<u16> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.truncate(k);
    sorted
}

fn bench_selection(c: &mut Criterion) {
    let width = 1024;
    let height = 1024;
    let image = make_image(width, height);
    let view = ImageView::from_slice(&image, width, height).unwrap();

    let mut group = c.benchmark_group("top_k_1mpx");
    for k in [10usize, 50, 1000] {
        group.bench_with_input(BenchmarkId::new("heap", k), &k, |b, &k| {
            b.iter(|| black_box(select_top_k(image.iter().copied(), k).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("full_sort", k), &k, |b, &k| {
            b.iter(|| black_box(sort_top_k(&image, k)));
        });
        group.bench_with_input(BenchmarkId::new("top_pixels", k), &k, |b, &k| {
            b.iter(|| black_box(top_pixels(view, k).unwrap()));
        });
        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("par_select", k), &k, |b, &k| {
            b.iter(|| {
                black_box(
                    highpix::par_select_top_k(&image, k, highpix::DEFAULT_CHUNK_LEN).unwrap(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
