/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Generate a padded, bottom-up BMP of the given size.
///
/// Pixels alternate between a diagonal white stripe and a colour
/// gradient so both glyphs appear when rendered.
pub fn synthetic_bmp(width: u32, height: u32, bits_per_pixel: u16) -> Vec<u8> {
    let components = usize::from(bits_per_pixel / 8);
    let stride = (width as usize * components + 3) & !3;
    let data_len = stride * height as usize;

    let mut out = Vec::with_capacity(54 + data_len);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(54 + data_len as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&54_u32.to_le_bytes());
    out.extend_from_slice(&40_u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1_u16.to_le_bytes());
    out.extend_from_slice(&bits_per_pixel.to_le_bytes());
    out.extend_from_slice(&0_u32.to_le_bytes());
    out.extend_from_slice(&(data_len as u32).to_le_bytes());
    out.extend_from_slice(&[0; 16]);

    for y in 0..height {
        let row_start = out.len();
        for x in 0..width {
            if (x + y) % 7 == 0 {
                out.extend_from_slice(&[255; 3]);
            } else {
                out.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 128]);
            }
            if components == 4 {
                out.push(255);
            }
        }
        out.resize(row_start + stride, 0);
    }
    out
}
