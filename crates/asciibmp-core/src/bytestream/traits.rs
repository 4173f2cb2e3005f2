/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading bytes in asciibmp

use std::io::SeekFrom;

use crate::bytestream::reader::ByteIoError;

/// The input trait implemented for readers.
///
/// This provides the handful of functions the BMP decoder needs,
/// it is implemented for [`Cursor`](std::io::Cursor) (in memory buffers)
/// and [`BufReader`](std::io::BufReader) (files and anything else that can seek).
pub trait ByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Arguments
    ///  - `buf`: Buffer to fill with bytes from the underlying reader
    ///
    /// ## Errors
    /// [`ByteIoError::NotEnoughBytes`] if the source ran out before `buf` was filled
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// Same as [`read_exact_bytes`](Self::read_exact_bytes) but for a buffer whose
    /// size is known at compile time
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.read_exact_bytes(buf)
    }

    /// Seek into a new position in the stream
    ///
    /// Seeking past the end is allowed, subsequent reads will fail
    fn b_seek(&mut self, from: SeekFrom) -> Result<u64, ByteIoError>;

    /// Report whether we are at the end of the stream.
    fn is_eof(&mut self) -> Result<bool, ByteIoError>;

    /// Return the current position of the inner cursor.
    fn b_position(&mut self) -> Result<u64, ByteIoError>;
}
