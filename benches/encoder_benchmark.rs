use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use termsixel::{encode, Image, Palette, SurfaceMut};

// Generate indexed test images with different run-length profiles

fn generate_gradient(width: usize, height: usize, colours: usize) -> Image<u8> {
    let mut image = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            image.set(x, y, ((x * colours) / width.max(1)) as u8);
        }
    }
    image
}

fn generate_checkerboard(width: usize, height: usize, cell_size: usize) -> Image<u8> {
    let mut image = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let index = (((x / cell_size) + (y / cell_size)) % 2) as u8;
            image.set(x, y, index);
        }
    }
    image
}

fn generate_noise(width: usize, height: usize, colours: usize) -> Image<u8> {
    let mut image = Image::new(width, height);
    let mut state = 0x2545f4914f6cdd1d_u64;
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            image.set(x, y, (state as usize % colours) as u8);
        }
    }
    image
}

fn bench_gradient(c: &mut Criterion) {
    let image = generate_gradient(256, 256, 101);
    let palette = Palette::gray(101);

    c.bench_function("encode_gradient_256x256", |b| {
        b.iter(|| encode(black_box(&image), black_box(&palette), false).unwrap())
    });
}

fn bench_checkerboard(c: &mut Criterion) {
    let image = generate_checkerboard(256, 256, 8);
    let palette = Palette::gray(2);

    c.bench_function("encode_checkerboard_256x256", |b| {
        b.iter(|| encode(black_box(&image), black_box(&palette), false).unwrap())
    });
}

fn bench_noise(c: &mut Criterion) {
    let image = generate_noise(256, 256, 16);
    let palette = Palette::jet(16);

    c.bench_function("encode_noise_256x256", |b| {
        b.iter(|| encode(black_box(&image), black_box(&palette), false).unwrap())
    });
}

fn bench_transparent_sparse(c: &mut Criterion) {
    // mostly background; transparency lets the encoder skip whole rows
    let mut image = Image::new(512, 128);
    for x in (0..512).step_by(17) {
        image.set(x, x % 128, 1u8);
    }
    let palette = Palette::gray(2);

    c.bench_function("encode_sparse_transparent_512x128", |b| {
        b.iter(|| encode(black_box(&image), black_box(&palette), true).unwrap())
    });
}

criterion_group!(
    benches,
    bench_gradient,
    bench_checkerboard,
    bench_noise,
    bench_transparent_sparse
);
criterion_main!(benches);
