/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! BMP file and info headers
//!
//! Layout of the two headers as stored on disk, all values little endian
//!
//! ```text
//! offset  size  field
//! ------  ----  -------------------------
//!   0      2    file type ("BM")
//!   2      4    file size
//!   6      2    reserved
//!   8      2    reserved
//!  10      4    pixel data offset
//! ------  ----  -------------------------
//!  14      4    info header size
//!  18      4    width             (signed)
//!  22      4    height            (signed, > 0 means bottom-up rows)
//!  26      2    color planes
//!  28      2    bits per pixel
//!  30      4    compression
//!  34      4    image size
//!  38      4    x pixels per meter (signed)
//!  42      4    y pixels per meter (signed)
//!  46      4    colors used
//!  50      4    important colors
//! ```
//!
//! Fields are decoded one at a time, so the layout does not depend on how
//! the compiler would pack an equivalent struct.

use asciibmp_core::bytestream::{ByteIoError, ByteReader, ByteReaderTrait};
use log::trace;

use crate::common::{BmpCompression, BmpPixelFormat};
use crate::errors::BmpDecoderErrors;

/// Size of the file header on disk
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the (`BITMAPINFOHEADER`) info header on disk
pub const INFO_HEADER_SIZE: usize = 40;
/// `BM` read as a little endian u16
pub const BMP_MAGIC: u16 = u16::from_le_bytes(*b"BM");

/// The leading 14 byte block of a BMP file
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FileHeader {
    pub file_type:         u16,
    pub file_size:         u32,
    pub reserved1:         u16,
    pub reserved2:         u16,
    /// Where pixel data starts, counted from the start of the file
    pub pixel_data_offset: u32
}

impl FileHeader {
    pub fn read<T: ByteReaderTrait>(reader: &mut ByteReader<T>) -> Result<FileHeader, ByteIoError> {
        Ok(FileHeader {
            file_type:         reader.get_u16_le_err()?,
            file_size:         reader.get_u32_le_err()?,
            reserved1:         reader.get_u16_le_err()?,
            reserved2:         reader.get_u16_le_err()?,
            pixel_data_offset: reader.get_u32_le_err()?
        })
    }

    /// Whether the file starts with `BM`
    pub const fn has_magic(&self) -> bool {
        self.file_type == BMP_MAGIC
    }
}

/// The 40 byte info header following the file header
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct InfoHeader {
    pub header_size:        u32,
    pub width:              i32,
    pub height:             i32,
    pub planes:             u16,
    pub bits_per_pixel:     u16,
    pub compression:        u32,
    pub image_size:         u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used:        u32,
    pub colors_important:   u32
}

impl InfoHeader {
    pub fn read<T: ByteReaderTrait>(reader: &mut ByteReader<T>) -> Result<InfoHeader, ByteIoError> {
        Ok(InfoHeader {
            header_size:        reader.get_u32_le_err()?,
            width:              reader.get_i32_le_err()?,
            height:             reader.get_i32_le_err()?,
            planes:             reader.get_u16_le_err()?,
            bits_per_pixel:     reader.get_u16_le_err()?,
            compression:        reader.get_u32_le_err()?,
            image_size:         reader.get_u32_le_err()?,
            x_pixels_per_meter: reader.get_i32_le_err()?,
            y_pixels_per_meter: reader.get_i32_le_err()?,
            colors_used:        reader.get_u32_le_err()?,
            colors_important:   reader.get_u32_le_err()?
        })
    }

    /// Number of stored rows, the magnitude of `height`
    pub const fn row_count(&self) -> usize {
        self.height.unsigned_abs() as usize
    }

    /// Positive heights store the visual bottom row first
    pub const fn is_bottom_up(&self) -> bool {
        self.height > 0
    }

    /// The pixel layout, `None` for unsupported bit depths
    pub const fn pixel_format(&self) -> Option<BmpPixelFormat> {
        BmpPixelFormat::from_depth(self.bits_per_pixel)
    }

    /// The declared compression scheme, `None` if it isn't one we recognise
    pub fn compression_scheme(&self) -> Option<BmpCompression> {
        BmpCompression::from_u32(self.compression)
    }
}

/// Read the file header immediately followed by the info header.
///
/// The reader is expected to be positioned at the start of the file,
/// after a successful call it points just past the info header.
///
/// No validation beyond the reads themselves happens here, see
/// [`BmpDecoder::decode_headers`](crate::BmpDecoder::decode_headers)
pub fn read_headers<T: ByteReaderTrait>(
    reader: &mut ByteReader<T>
) -> Result<(FileHeader, InfoHeader), BmpDecoderErrors> {
    let file_header = FileHeader::read(reader)?;
    let info_header = InfoHeader::read(reader)?;

    trace!("File size: {}", file_header.file_size);
    trace!("Pixel data offset: {}", file_header.pixel_data_offset);
    trace!("Info header size: {}", info_header.header_size);

    Ok((file_header, info_header))
}

/// Probe some bytes to see
/// if they consist of a BMP image we can read headers from
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read info header size
            if let Some(sz) = bytes.get(14..18) {
                let sz = u32::from_le_bytes([sz[0], sz[1], sz[2], sz[3]]);

                return sz == 40 || sz == 52 || sz == 56 || sz == 108 || sz == 124;
            }
        }
    }
    false
}
