/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use log::trace;

use crate::errors::BmpDecoderErrors;
use crate::image::BmpImage;
use crate::pixel::Pixel;

/// Renders an open [`BmpImage`] as text, one line per row.
///
/// Pure white pixels become the white glyph (`X` by default),
/// every other pixel becomes the black glyph (`.` by default).
///
/// Lines come out top row first whatever the stored row order:
/// bottom-up images (positive height) are walked from the last stored row,
/// top-down images (negative height) in stored order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AsciiRenderer {
    white: char,
    black: char
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        AsciiRenderer {
            white: 'X',
            black: '.'
        }
    }
}

impl AsciiRenderer {
    pub fn new() -> AsciiRenderer {
        AsciiRenderer::default()
    }

    pub const fn white(&self) -> char {
        self.white
    }

    pub const fn black(&self) -> char {
        self.black
    }

    /// Set the glyph used for white pixels
    pub fn set_white(mut self, glyph: char) -> Self {
        self.white = glyph;
        self
    }

    /// Set the glyph used for non white pixels
    pub fn set_black(mut self, glyph: char) -> Self {
        self.black = glyph;
        self
    }

    #[inline(always)]
    fn glyph(&self, pixel: &Pixel) -> char {
        if pixel.is_white() {
            self.white
        } else {
            self.black
        }
    }

    /// Call `sink` with every output line, top row first
    fn for_each_line<F>(&self, image: &BmpImage, mut sink: F) -> Result<(), BmpDecoderErrors>
    where
        F: FnMut(&str) -> Result<(), BmpDecoderErrors>
    {
        let decoded = image.decoded().ok_or(BmpDecoderErrors::NotOpen)?;
        let width = decoded.width();

        if width == 0 {
            return Ok(());
        }
        let rows = decoded.pixels.chunks_exact(width);
        let mut line = String::with_capacity(width);

        let mut emit = |row: &[Pixel]| {
            line.clear();
            line.extend(row.iter().map(|pixel| self.glyph(pixel)));
            sink(&line)
        };

        if decoded.info_header.is_bottom_up() {
            trace!("Rendering bottom-up rows in reverse");
            rows.rev().try_for_each(&mut emit)
        } else {
            trace!("Rendering top-down rows in stored order");
            rows.into_iter().try_for_each(&mut emit)
        }
    }

    /// Render `image` into a list of lines, top row first
    ///
    /// # Errors
    /// `NotOpen` if the image is closed
    pub fn render_lines(&self, image: &BmpImage) -> Result<Vec<String>, BmpDecoderErrors> {
        let mut lines = Vec::with_capacity(image.dimensions().map_or(0, |(_, h)| h));

        self.for_each_line(image, |line| {
            lines.push(line.to_owned());
            Ok(())
        })?;

        Ok(lines)
    }

    /// Write `image` to `writer`, every row terminated by a newline
    ///
    /// # Errors
    /// - `NotOpen` if the image is closed
    /// - `OutputError` if writing fails
    pub fn render<W: Write>(&self, image: &BmpImage, writer: &mut W) -> Result<(), BmpDecoderErrors> {
        self.for_each_line(image, |line| {
            writeln!(writer, "{line}").map_err(BmpDecoderErrors::OutputError)
        })?;

        writer.flush().map_err(BmpDecoderErrors::OutputError)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::{AsciiRenderer, BmpDecoderErrors, BmpImage};

    /// A tightly packed 24 bit image, `rows` given in stored order as `[r,g,b]`
    fn bmp(width: i32, height: i32, rows: &[[u8; 3]]) -> Vec<u8> {
        let data_len = (rows.len() * 3) as u32;
        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(54 + data_len).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&54_u32.to_le_bytes());
        out.extend_from_slice(&40_u32.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1_u16.to_le_bytes());
        out.extend_from_slice(&24_u16.to_le_bytes());
        out.extend_from_slice(&[0; 24]);
        for [r, g, b] in rows {
            out.extend_from_slice(&[*b, *g, *r]);
        }
        out
    }

    const W: [u8; 3] = [255, 255, 255];
    const K: [u8; 3] = [0, 0, 0];

    #[test]
    fn bottom_up_two_by_two() {
        let mut image = BmpImage::new();
        image
            .open_from(Cursor::new(bmp(2, 2, &[K, W, W, K])))
            .unwrap();

        let mut out = Vec::new();
        image.render_to(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "X.\n.X\n");
    }

    #[test]
    fn top_down_keeps_stored_order() {
        let mut image = BmpImage::new();
        image
            .open_from(Cursor::new(bmp(3, -2, &[W, K, K, K, K, W])))
            .unwrap();

        let lines = AsciiRenderer::new().render_lines(&image).unwrap();
        assert_eq!(lines, ["X..", "..X"]);
    }

    #[test]
    fn near_white_is_not_white() {
        let near = [[254, 255, 255], [255, 254, 255], [255, 255, 254], W];
        let mut image = BmpImage::new();
        image.open_from(Cursor::new(bmp(4, 1, &near))).unwrap();

        let lines = AsciiRenderer::new().render_lines(&image).unwrap();
        assert_eq!(lines, ["...X"]);
    }

    #[test]
    fn custom_glyphs() {
        let mut image = BmpImage::new();
        image.open_from(Cursor::new(bmp(2, 1, &[W, K]))).unwrap();

        let renderer = AsciiRenderer::new().set_white('#').set_black(' ');
        let mut out = Vec::new();
        image.render_with(&renderer, &mut out).unwrap();

        assert_eq!(out, b"# \n");
    }

    #[test]
    fn closed_image_is_not_rendered() {
        let image = BmpImage::new();
        let mut out = Vec::new();

        assert!(matches!(
            image.render_to(&mut out),
            Err(BmpDecoderErrors::NotOpen)
        ));
        assert!(out.is_empty());
        assert!(matches!(
            AsciiRenderer::new().render_lines(&image),
            Err(BmpDecoderErrors::NotOpen)
        ));
    }
}
