/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use std::io::SeekFrom;

use crate::bytestream::ByteReaderTrait;

mod std_readers;

/// Errors that can occur when reading from a [`ByteReader`]
#[non_exhaustive]
pub enum ByteIoError {
    /// An error from the underlying reader
    StdIoError(std::io::Error),
    /// A position could not be represented
    TryFromIntError(core::num::TryFromIntError),
    /// The stream ended early.
    ///
    /// Fields are `(requested, read)`
    NotEnoughBytes(usize, usize),
    /// A seek could not be satisfied
    SeekError(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => write!(f, "{err}"),
            ByteIoError::TryFromIntError(err) => write!(f, "cannot convert to int: {err}"),
            ByteIoError::NotEnoughBytes(expected, found) => {
                write!(f, "unexpected end of file, wanted {expected} bytes but got {found}")
            }
            ByteIoError::SeekError(err) => write!(f, "seek error: {err}")
        }
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ByteIoError::TryFromIntError(value)
    }
}

/// An endian aware reader over a [`ByteReaderTrait`] source
pub struct ByteReader<T: ByteReaderTrait> {
    inner: T
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    /// Skip `num` bytes forward
    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<u64, ByteIoError> {
        let num = i64::try_from(num)?;
        self.inner.b_seek(SeekFrom::Current(num))
    }

    /// Move to an absolute position in the stream
    #[inline]
    pub fn set_position(&mut self, position: u64) -> Result<(), ByteIoError> {
        self.inner.b_seek(SeekFrom::Start(position))?;

        Ok(())
    }

    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, ByteIoError> {
        self.inner.b_position()
    }

    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ByteIoError> {
        self.inner.is_eof()
    }

    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let mut buf = [0];
        self.inner.read_const_bytes(&mut buf)?;
        Ok(buf[0])
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_const_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.read_exact_bytes(buf)
    }
}

macro_rules! get_single_type {
    ($name:tt,$int_type:tt) => {
        impl<T: ByteReaderTrait> ByteReader<T> {
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                self.inner.read_const_bytes(&mut space)?;

                Ok($int_type::from_le_bytes(space))
            }
        }
    };
}

get_single_type!(get_u16_le_err, u16);
get_single_type!(get_u32_le_err, u32);
get_single_type!(get_i32_le_err, i32);
