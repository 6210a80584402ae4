//! Conversion Benchmarks
//!
//! Single-sample conversions and batch throughput, sequential vs rayon.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use exposure_color::{BatchOptions, RgbF, RgbU8, XyzF, batch, lerp};

fn generate_rgb8_data(count: usize) -> Vec<RgbU8> {
    (0..count)
        .map(|i| RgbU8::new((i * 37 % 256) as u8, (i * 11 % 256) as u8, (i * 3 % 256) as u8))
        .collect()
}

fn generate_xyz_data(count: usize) -> Vec<XyzF> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            XyzF::new(t, (t * 2.0) % 1.0, (t * 3.0) % 1.0)
        })
        .collect()
}

// ============================================================================
// Single Sample Benchmarks
// ============================================================================

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");

    let rgb = RgbF::new(0.5, 0.3, 0.7);
    let rgb8 = RgbU8::new(200, 100, 50);
    let xyz = XyzF::new(0.4, 0.5, 0.6);

    group.bench_function("xyzf_from_rgbf", |b| {
        b.iter(|| XyzF::from_rgbf(black_box(rgb)))
    });
    group.bench_function("xyzf_from_rgbu8", |b| {
        b.iter(|| XyzF::from_rgbu8(black_box(rgb8)))
    });
    group.bench_function("rgbu8_from_xyzf", |b| {
        b.iter(|| RgbU8::from_xyzf(black_box(xyz)))
    });
    group.bench_function("luminance", |b| b.iter(|| black_box(xyz).luminance()));
    group.bench_function("lerp", |b| {
        b.iter(|| lerp(black_box(0.3), black_box(xyz), black_box(XyzF::black())))
    });

    group.finish();
}

// ============================================================================
// Batch Benchmarks
// ============================================================================

fn bench_batch_to_xyz(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgbu8_to_xyzf");

    for size in [1000, 10000, 100000, 1000000].iter() {
        let src = generate_rgb8_data(*size);
        let mut dst = vec![XyzF::black(); *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| {
                batch::rgbu8_to_xyzf(
                    black_box(&src),
                    black_box(&mut dst),
                    &BatchOptions::sequential(),
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| {
                batch::rgbu8_to_xyzf(black_box(&src), black_box(&mut dst), &BatchOptions::default())
            })
        });
    }

    group.finish();
}

fn bench_batch_to_rgb8(c: &mut Criterion) {
    let mut group = c.benchmark_group("xyzf_to_rgb8_bytes");

    for size in [1000, 10000, 100000, 1000000].iter() {
        let src = generate_xyz_data(*size);
        let mut dst = vec![0u8; *size * 3];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| {
                batch::xyzf_to_rgb8_bytes(
                    black_box(&src),
                    black_box(&mut dst),
                    &BatchOptions::sequential(),
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| {
                batch::xyzf_to_rgb8_bytes(black_box(&src), black_box(&mut dst), &BatchOptions::default())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_batch_to_xyz, bench_batch_to_rgb8);

criterion_main!(benches);
