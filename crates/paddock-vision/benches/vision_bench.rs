//! paddock-vision 성능 벤치마크
//!
//! 실행: cargo bench -p paddock-vision
//!
//! 벤치마크 대상:
//! - 영역 리스케일 (fast_resize)
//! - 좌표 변환 (to_world_space / to_screen_space)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{Rgb, RgbImage};
use paddock_core::mapper::CoordinateMapper;
use paddock_core::models::geometry::{Point, WindowGeometry};
use paddock_vision::resize;

/// 테스트용 그라데이션 이미지 생성
fn create_test_image(width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let r = (x % 256) as u8;
        let g = (y % 256) as u8;
        let b = ((x + y) % 256) as u8;
        *pixel = Rgb([r, g, b]);
    }
    img
}

/// 리스케일 벤치마크
fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_resize");

    let resolutions = [(640, 480), (1280, 720), (1920, 1080)];

    for (width, height) in resolutions {
        let pixels = width * height;
        group.throughput(Throughput::Elements(pixels as u64));

        let img = create_test_image(width, height);

        group.bench_with_input(
            BenchmarkId::new("downscale_half", format!("{width}x{height}")),
            &img,
            |b, img| b.iter(|| resize::fast_resize(black_box(img), width / 2, height / 2).unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("upscale_to_1080p_width", format!("{width}x{height}")),
            &img,
            |b, img| b.iter(|| resize::fast_resize(black_box(img), 1920, 1080).unwrap()),
        );
    }

    group.finish();
}

/// 좌표 변환 벤치마크
fn bench_mapper(c: &mut Criterion) {
    let mapper = CoordinateMapper::new();
    mapper.initialize(&WindowGeometry {
        left: 0,
        top: 0,
        width: 2560,
        height: 1080,
    });

    c.bench_function("to_world_space", |b| {
        b.iter(|| mapper.to_world_space(black_box(Point::new(960.0, 540.0))))
    });

    c.bench_function("roundtrip", |b| {
        b.iter(|| {
            let screen = mapper.to_screen_space(black_box(Point::new(1280.0, 540.0)));
            mapper.to_world_space(screen)
        })
    });
}

criterion_group!(benches, bench_resize, bench_mapper);
criterion_main!(benches);
