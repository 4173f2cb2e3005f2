/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use asciibmp_core::bytestream::ByteIoError;

/// BMP errors that can occur during opening, decoding and rendering
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The input path could not be opened for reading
    OpenError(std::io::Error),
    /// Headers were read but the bit depth is neither 24 nor 32
    UnsupportedFormat(u16),
    /// The image declares a compression scheme, only rejected in strict mode
    UnsupportedCompression(u32),
    /// A header or pixel read came up short, or a seek failed
    ReadError(ByteIoError),
    /// Rendering was requested without a successfully decoded image
    NotOpen,
    /// The file/bytes do not start with `BM`, only checked in strict mode
    InvalidMagicBytes,
    /// A zero or negative dimension, the field name and its value
    InvalidDimensions(&'static str, i32),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// A calculation overflowed
    OverflowOccurred,
    /// Writing the rendered image failed
    OutputError(std::io::Error)
}

impl BmpDecoderErrors {
    /// Process exit status used by the command line tool for this error.
    ///
    /// `2` is left to the argument parser.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::OpenError(_) => 3,
            Self::UnsupportedFormat(_) | Self::UnsupportedCompression(_) => 4,
            Self::ReadError(_) => 5,
            Self::NotOpen => 6,
            Self::InvalidMagicBytes
            | Self::InvalidDimensions(..)
            | Self::TooLargeDimensions(..)
            | Self::OverflowOccurred => 7,
            Self::OutputError(_) => 8
        }
    }
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OpenError(err) => {
                writeln!(f, "Cannot open image: {:?}", err)
            }
            Self::UnsupportedFormat(depth) => {
                writeln!(f, "Unsupported BMP format, bit depth {depth} is not 24 or 32")
            }
            Self::UnsupportedCompression(compression) => {
                writeln!(f, "Unsupported BMP compression scheme {compression}")
            }
            Self::ReadError(err) => {
                writeln!(f, "Could not read image data: {:?}", err)
            }
            Self::NotOpen => {
                writeln!(f, "Not opened image can't be displayed")
            }
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::InvalidDimensions(dimension, value) => {
                writeln!(f, "Invalid {dimension} {value}")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::OverflowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::OutputError(err) => {
                writeln!(f, "Could not write output: {:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OpenError(err) => write!(f, "Can't open image: {err}"),
            Self::UnsupportedFormat(depth) => {
                write!(f, "Unsupported BMP format: {depth} bits per pixel")
            }
            Self::UnsupportedCompression(compression) => {
                write!(f, "Unsupported BMP format: compression scheme {compression}")
            }
            Self::ReadError(err) => write!(f, "Can't read image: {err}"),
            Self::NotOpen => write!(f, "Not opened image can't be displayed."),
            Self::InvalidMagicBytes => write!(f, "Not a BMP file: missing BM signature"),
            Self::InvalidDimensions(dimension, value) => {
                write!(f, "Invalid image {dimension}: {value}")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                write!(f, "Image {dimension} {found} exceeds the limit of {expected}")
            }
            Self::OverflowOccurred => write!(f, "Image dimensions overflow"),
            Self::OutputError(err) => write!(f, "Can't write output: {err}")
        }
    }
}

impl std::error::Error for BmpDecoderErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenError(err) | Self::OutputError(err) => Some(err),
            Self::ReadError(err) => Some(err),
            _ => None
        }
    }
}

impl From<ByteIoError> for BmpDecoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpDecoderErrors::ReadError(value)
    }
}
