/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![allow(dead_code)]

use std::path::PathBuf;

use asciibmp::Pixel;

pub const WHITE: Pixel = Pixel::WHITE;
pub const BLACK: Pixel = Pixel::new(0, 0, 0);

/// Writes small uncompressed BMP files for tests
#[derive(Copy, Clone, Debug)]
pub struct BmpBuilder {
    pub width:       i32,
    pub height:      i32,
    pub depth:       u16,
    pub magic:       [u8; 2],
    pub compression: u32,
    /// junk bytes between the info header and the pixel data
    pub gap:         usize,
    /// pad every row to a multiple of four bytes
    pub pad_rows:    bool,
    pub alpha:       u8
}

impl BmpBuilder {
    pub fn new(width: i32, height: i32, depth: u16) -> BmpBuilder {
        BmpBuilder {
            width,
            height,
            depth,
            magic: *b"BM",
            compression: 0,
            gap: 0,
            pad_rows: false,
            alpha: 0x7F
        }
    }

    /// Encode `pixels`, given in stored order
    pub fn build(&self, pixels: &[Pixel]) -> Vec<u8> {
        let mut data = Vec::new();
        let width = self.width.unsigned_abs() as usize;

        for row in pixels.chunks(width.max(1)) {
            let row_start = data.len();
            for pixel in row {
                data.extend_from_slice(&[pixel.b, pixel.g, pixel.r]);
                if self.depth == 32 {
                    data.push(self.alpha);
                }
            }
            if self.pad_rows {
                while (data.len() - row_start) % 4 != 0 {
                    data.push(0xEE);
                }
            }
        }
        let offset = (54 + self.gap) as u32;

        let mut out = Vec::new();
        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&(offset + data.len() as u32).to_le_bytes());
        out.extend_from_slice(&0_u16.to_le_bytes());
        out.extend_from_slice(&0_u16.to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());

        out.extend_from_slice(&40_u32.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1_u16.to_le_bytes());
        out.extend_from_slice(&self.depth.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
        out.extend_from_slice(&2835_i32.to_le_bytes());
        out.extend_from_slice(&2835_i32.to_le_bytes());
        out.extend_from_slice(&0_u32.to_le_bytes());
        out.extend_from_slice(&0_u32.to_le_bytes());

        out.resize(out.len() + self.gap, 0xAB);
        out.extend_from_slice(&data);
        out
    }
}

/// A deterministic pattern of `count` pixels, mixing white with other colours
pub fn pattern(count: usize) -> Vec<Pixel> {
    (0..count)
        .map(|i| match i % 5 {
            0 | 3 => WHITE,
            1 => Pixel::new(255, 255, 254),
            2 => BLACK,
            _ => Pixel::new((i * 7) as u8, (i * 13) as u8, (i * 29) as u8)
        })
        .collect()
}

/// A temporary file that is removed when dropped
pub struct TempBmp {
    pub path: PathBuf
}

impl TempBmp {
    pub fn new(name: &str, contents: &[u8]) -> TempBmp {
        let path = std::env::temp_dir().join(format!(
            "asciibmp-test-{}-{}.bmp",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        TempBmp { path }
    }
}

impl Drop for TempBmp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
