/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// A single decoded pixel.
///
/// BMP stores channels as blue, green, red (and alpha for 32 bit images),
/// the decoder swaps them into this struct and drops alpha.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Pixel {
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b }
    }

    /// Build a pixel from the on disk `[b, g, r]` byte order
    #[inline(always)]
    pub const fn from_bgr(bgr: [u8; 3]) -> Pixel {
        Pixel::new(bgr[2], bgr[1], bgr[0])
    }

    /// Whether every channel is at full intensity.
    ///
    /// Near white values (e.g. `254,255,255`) are not white.
    #[inline(always)]
    pub const fn is_white(&self) -> bool {
        self.r == 255 && self.g == 255 && self.b == 255
    }
}
