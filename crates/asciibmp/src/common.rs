/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Compression schemes a BMP info header can declare.
///
/// Only [`BmpCompression::RGB`] is decoded, the rest are recognised
/// so that they can be reported.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpCompression {
    RGB,
    RLE8,
    RLE4,
    BITFIELDS,
    JPEG,
    PNG
}

impl BmpCompression {
    pub fn from_u32(num: u32) -> Option<BmpCompression> {
        match num {
            0 => Some(BmpCompression::RGB),
            1 => Some(BmpCompression::RLE8),
            2 => Some(BmpCompression::RLE4),
            3 => Some(BmpCompression::BITFIELDS),
            4 => Some(BmpCompression::JPEG),
            5 => Some(BmpCompression::PNG),
            _ => None
        }
    }
}

/// Pixel layouts the decoder understands
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpPixelFormat {
    /// 24 bits, stored as blue, green, red
    BGR,
    /// 32 bits, stored as blue, green, red, alpha
    BGRA
}

impl BmpPixelFormat {
    /// Map a `bits_per_pixel` header value to a layout,
    /// `None` for anything other than 24 or 32
    pub const fn from_depth(depth: u16) -> Option<BmpPixelFormat> {
        match depth {
            24 => Some(BmpPixelFormat::BGR),
            32 => Some(BmpPixelFormat::BGRA),
            _ => None
        }
    }

    /// Number of bytes a single pixel occupies in the file
    pub const fn num_components(&self) -> usize {
        match self {
            BmpPixelFormat::BGR => 3,
            BmpPixelFormat::BGRA => 4
        }
    }
}
