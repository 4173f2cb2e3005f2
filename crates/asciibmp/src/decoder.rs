/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// Only the WinBMPv3 layout (14 byte file header + 40 byte info header) is
// read. Larger Windows info headers (v4, v5) share the same first 40 bytes,
// the extra fields are skipped by jumping straight to the pixel data offset.
//
// BMP writes rows from bottom to top when the height is positive, meaning the
// first pixel in the stream is the bottom left pixel of the picture.
//   ┌───────────────┐
//   │               │
//   │               │
//   │               │
//   │[0,h-1]        │
//   └───────────────┘
// The decoder keeps pixels in the order they are stored, it is the renderer
// that walks rows in the right direction.

use asciibmp_core::bytestream::{ByteReader, ByteReaderTrait};
use asciibmp_core::options::DecoderOptions;
use log::{trace, warn};

use crate::common::{BmpCompression, BmpPixelFormat};
use crate::headers::{read_headers, FileHeader, InfoHeader, INFO_HEADER_SIZE};
use crate::pixel::Pixel;
use crate::BmpDecoderErrors;

/// A BMP decoder.
///
/// # Usage
/// The decoder can be used to read image information and or get the pixels out of a valid bmp
/// image.
///
/// ## Extracting image metadata
/// ```no_run
/// use std::io::Cursor;
/// use asciibmp::BmpDecoder;
///
/// fn main() -> Result<(), asciibmp::BmpDecoderErrors> {
///     let source = Cursor::new(std::fs::read("image.bmp").unwrap_or_default());
///     let mut decoder = BmpDecoder::new(source);
///     let (_, info) = decoder.decode_headers()?;
///     println!("Image width: {}\t Image height: {}", info.width, info.height);
///     Ok(())
/// }
/// ```
///
/// ## Just getting the pixels
/// ```no_run
/// use std::io::Cursor;
/// use asciibmp::BmpDecoder;
///
/// fn main() -> Result<(), asciibmp::BmpDecoderErrors> {
///     let source = Cursor::new(std::fs::read("image.bmp").unwrap_or_default());
///     let mut decoder = BmpDecoder::new(source);
///     let pixels = decoder.decode()?;
///     println!("Pixels length:{}", pixels.len());
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<T>
where
    T: ByteReaderTrait
{
    bytes:   ByteReader<T>,
    options: DecoderOptions,
    headers: Option<(FileHeader, InfoHeader)>,
    width:   usize,
    height:  usize,
    pix_fmt: BmpPixelFormat
}

impl<T> BmpDecoder<T>
where
    T: ByteReaderTrait
{
    /// Create a new bmp decoder that reads data from
    /// `data`
    ///
    /// The source should be positioned at the start of the file
    pub fn new(data: T) -> BmpDecoder<T> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The source from which we will read data from
    /// * `options`:  Specialized options for this decoder
    pub fn new_with_options(data: T, options: DecoderOptions) -> BmpDecoder<T> {
        BmpDecoder {
            bytes: ByteReader::new(data),
            options,
            headers: None,
            width: 0,
            height: 0,
            pix_fmt: BmpPixelFormat::BGR
        }
    }

    /// Decode and validate the file and info headers
    ///
    /// Repeated calls return the headers decoded the first time.
    ///
    /// # Errors
    /// - `ReadError`: the source is shorter than both headers
    /// - `InvalidMagicBytes`: strict mode and the file does not start with `BM`
    /// - `UnsupportedFormat`: bit depth is not 24 or 32
    /// - `UnsupportedCompression`: strict mode and the image is compressed
    /// - `InvalidDimensions`: width is not positive or height is zero
    /// - `TooLargeDimensions`: the image exceeds the configured limits
    pub fn decode_headers(&mut self) -> Result<(FileHeader, InfoHeader), BmpDecoderErrors> {
        if let Some(headers) = self.headers {
            return Ok(headers);
        }
        let (file_header, info_header) = read_headers(&mut self.bytes)?;

        if !file_header.has_magic() {
            if self.options.strict_mode() {
                return Err(BmpDecoderErrors::InvalidMagicBytes);
            }
            warn!(
                "File type {:#06x} is not BM, decoding anyway",
                file_header.file_type
            );
        }

        let pix_fmt = info_header
            .pixel_format()
            .ok_or(BmpDecoderErrors::UnsupportedFormat(info_header.bits_per_pixel))?;

        match info_header.compression_scheme() {
            Some(BmpCompression::RGB) => {}
            other => {
                if self.options.strict_mode() {
                    return Err(BmpDecoderErrors::UnsupportedCompression(
                        info_header.compression
                    ));
                }
                warn!("Compression {:?} ignored, reading pixels as raw data", other);
            }
        }

        if info_header.width <= 0 {
            return Err(BmpDecoderErrors::InvalidDimensions(
                "width",
                info_header.width
            ));
        }
        if info_header.height == 0 {
            return Err(BmpDecoderErrors::InvalidDimensions(
                "height",
                info_header.height
            ));
        }

        let width = info_header.width.unsigned_abs() as usize;
        let height = info_header.row_count();

        if width > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                width
            ));
        }
        if height > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                height
            ));
        }

        if (info_header.header_size as usize) < INFO_HEADER_SIZE {
            warn!(
                "Info header size {} is smaller than {}",
                info_header.header_size, INFO_HEADER_SIZE
            );
        }

        trace!("Width: {}", width);
        trace!("Height: {}", height);
        trace!("Bottom up: {}", info_header.is_bottom_up());
        trace!("Pixel format : {:?}", pix_fmt);
        trace!("Compression  : {:?}", info_header.compression_scheme());

        self.width = width;
        self.height = height;
        self.pix_fmt = pix_fmt;
        self.headers = Some((file_header, info_header));

        Ok((file_header, info_header))
    }

    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height where height is the number of rows
    /// regardless of the row order
    ///
    /// # Returns
    /// - `Some((width,height))`  - The image dimensions
    /// - `None`: Indicates that the image headers weren't decoded
    ///    or an error occurred during decoding the headers
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.headers.map(|_| (self.width, self.height))
    }

    /// Get the pixel layout of the image or `None` if headers weren't decoded
    pub fn pixel_format(&self) -> Option<BmpPixelFormat> {
        self.headers.map(|_| self.pix_fmt)
    }

    /// Number of pixels the decoded image holds
    ///
    /// Returns `None` if headers haven't been decoded or if calculation overflows
    pub fn output_len(&self) -> Option<usize> {
        self.headers?;
        self.width.checked_mul(self.height)
    }

    /// Decode the image, returning pixels in the order they are stored in the file.
    ///
    /// Each run of `width` pixels is one stored row, for bottom-up images
    /// (positive height) the first run is the bottom row of the picture.
    pub fn decode(&mut self) -> Result<Vec<Pixel>, BmpDecoderErrors> {
        let (file_header, _) = self.decode_headers()?;

        let count = self
            .output_len()
            .ok_or(BmpDecoderErrors::OverflowOccurred)?;

        // Pixel data may be preceded by a colour table or a gap
        self.bytes
            .set_position(u64::from(file_header.pixel_data_offset))?;

        let padding = if self.options.honor_row_padding() {
            row_padding(self.width, self.pix_fmt)
        } else {
            0
        };

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| BmpDecoderErrors::OverflowOccurred)?;

        for _ in 0..self.height {
            match self.pix_fmt {
                BmpPixelFormat::BGR => {
                    for _ in 0..self.width {
                        let bgr = self.bytes.read_fixed_bytes_or_error::<3>()?;
                        pixels.push(Pixel::from_bgr(bgr));
                    }
                }
                BmpPixelFormat::BGRA => {
                    for _ in 0..self.width {
                        // alpha is read to keep in step with the stream and dropped
                        let [b, g, r, _] = self.bytes.read_fixed_bytes_or_error::<4>()?;
                        pixels.push(Pixel::new(r, g, b));
                    }
                }
            }
            if padding != 0 {
                self.bytes.skip(padding)?;
            }
        }
        trace!("Decoded {} pixels", pixels.len());

        Ok(pixels)
    }
}

/// Bytes needed to round a stored row up to a multiple of four
const fn row_padding(width: usize, pix_fmt: BmpPixelFormat) -> usize {
    let row_bytes = width.wrapping_mul(pix_fmt.num_components());
    (4 - (row_bytes % 4)) % 4
}
