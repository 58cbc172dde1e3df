use colorz::{palette_from_image, ExtractOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgb, RgbImage};

fn benchmark_palette_extraction(c: &mut Criterion) {
    // Synthetic photo-like gradient, large enough to exercise the thumbnail
    let img = RgbImage::from_fn(512, 512, |x, y| {
        Rgb([(x / 2) as u8, (y / 2) as u8, ((x + y) / 4) as u8])
    });
    let image = DynamicImage::ImageRgb8(img);
    let options = ExtractOptions {
        seed: Some(0),
        ..ExtractOptions::default()
    };

    c.bench_function("palette_from_image_512", |b| {
        b.iter(|| palette_from_image(black_box(&image), black_box(&options)).unwrap())
    });
}

criterion_group!(benches, benchmark_palette_extraction);
criterion_main!(benches);
