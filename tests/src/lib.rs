/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use asciibmp::Pixel;
use serde::Deserialize;

mod render;

/// One synthetic image described in `render.json`
#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:           String,
    pub width:          i32,
    pub height:         i32,
    pub bits_per_pixel: u16,
    /// `rrggbb` colours in stored order
    pub pixels:         Vec<String>,
    /// Expected lines, top row first
    #[serde(default)]
    pub expected:       Vec<String>,
    /// Exit code of the expected failure, if the image should not open
    pub exit_code:      Option<i32>,
    #[serde(default)]
    pub padded_rows:    bool,
    /// Drop this many bytes from the end of the file
    #[serde(default)]
    pub truncate:       usize,
    pub comment:        Option<String>
}

impl TestEntry {
    /// Encode the entry as an uncompressed BMP file
    pub fn encode(&self) -> Vec<u8> {
        let width = self.width.unsigned_abs() as usize;
        let mut data = Vec::new();

        let pixels: Vec<Pixel> = self.pixels.iter().map(|p| parse_colour(p)).collect();

        for row in pixels.chunks(width.max(1)) {
            let row_start = data.len();
            for pixel in row {
                data.extend_from_slice(&[pixel.b, pixel.g, pixel.r]);
                if self.bits_per_pixel == 32 {
                    data.push(0);
                }
            }
            while self.padded_rows && (data.len() - row_start) % 4 != 0 {
                data.push(0);
            }
        }

        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(54 + data.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&54_u32.to_le_bytes());
        out.extend_from_slice(&40_u32.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1_u16.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&0_u32.to_le_bytes());
        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0; 16]);
        out.extend_from_slice(&data);

        out.truncate(out.len().saturating_sub(self.truncate));
        out
    }
}

/// Parse a `rrggbb` hex colour
pub fn parse_colour(colour: &str) -> Pixel {
    let channel = |i: usize| u8::from_str_radix(&colour[i..i + 2], 16).unwrap();
    Pixel::new(channel(0), channel(2), channel(4))
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_owned()
}
