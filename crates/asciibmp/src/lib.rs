/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A BMP decoder that renders images as ASCII art
//!
//! The crate reads a Windows bitmap, keeps its pixels in memory and prints
//! them as two glyphs, one for pure white pixels and one for everything else.
//!
//! # Supported formats
//! - Uncompressed 24 bit (BGR) images
//! - Uncompressed 32 bit (BGRA) images, alpha is read and discarded
//!
//! # Unsupported formats
//! - Palette images (1, 4 and 8 bits)
//! - RLE and bitfield compressed images
//! - Embedded PNG and JPEGs
//!
//! # Row layout
//! Rows are assumed to be tightly packed, i.e. the padding that rounds
//! every stored row to four bytes is not skipped unless
//! [`DecoderOptions::set_honor_row_padding`](asciibmp_core::options::DecoderOptions::set_honor_row_padding)
//! is enabled.
//!
//! # Usage
//! ```no_run
//! use asciibmp::BmpImage;
//!
//! fn main() -> Result<(), asciibmp::BmpDecoderErrors> {
//!     let mut image = BmpImage::new();
//!     image.open("picture.bmp")?;
//!     image.render()?;
//!     image.close();
//!     Ok(())
//! }
//! ```

pub use asciibmp_core;

pub use crate::common::{BmpCompression, BmpPixelFormat};
pub use crate::decoder::BmpDecoder;
pub use crate::errors::BmpDecoderErrors;
pub use crate::headers::{probe_bmp, read_headers, FileHeader, InfoHeader};
pub use crate::image::BmpImage;
pub use crate::pixel::Pixel;
pub use crate::render::AsciiRenderer;

mod common;
mod decoder;
mod errors;
pub mod headers;
mod image;
mod pixel;
mod render;
mod serde;
