/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{sink, Cursor};
use std::time::Duration;

use asciibmp::{AsciiRenderer, BmpDecoder, BmpImage};
use asciibmp_benches::synthetic_bmp;
use asciibmp_core::options::DecoderOptions;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn options() -> DecoderOptions {
    DecoderOptions::default().set_honor_row_padding(true)
}

fn decode_asciibmp(data: &[u8]) -> usize {
    BmpDecoder::new_with_options(Cursor::new(data), options())
        .decode()
        .unwrap()
        .len()
}

fn decode_image_rs(data: &[u8]) -> Vec<u8> {
    image::load_from_memory_with_format(data, image::ImageFormat::Bmp)
        .unwrap()
        .into_bytes()
}

fn bench_decode(c: &mut Criterion) {
    for depth in [24, 32] {
        let data = synthetic_bmp(1920, 1080, depth);

        let mut group = c.benchmark_group(format!("bmp: {depth}-bit decode"));
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_function("asciibmp", |b| {
            b.iter(|| black_box(decode_asciibmp(data.as_slice())))
        });

        group.bench_function("image-rs", |b| {
            b.iter(|| black_box(decode_image_rs(data.as_slice())))
        });
    }
}

fn bench_render(c: &mut Criterion) {
    let data = synthetic_bmp(1920, 1080, 24);

    let mut image = BmpImage::with_options(options());
    image.open_from(Cursor::new(data)).unwrap();

    let renderer = AsciiRenderer::new();

    let mut group = c.benchmark_group("bmp: ascii render");
    group.throughput(Throughput::Elements(image.pixels().len() as u64));

    group.bench_function("render to sink", |b| {
        b.iter(|| black_box(renderer.render(&image, &mut sink())))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_decode, bench_render);

criterion_main!(benches);
