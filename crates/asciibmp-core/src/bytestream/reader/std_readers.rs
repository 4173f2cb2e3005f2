/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io;
use std::io::{BufRead, BufReader, Cursor, Read, Seek, SeekFrom};

use crate::bytestream::reader::ByteIoError;
use crate::bytestream::ByteReaderTrait;

/// Fill `buf` from `reader`, reporting how far we got if the reader runs dry.
fn fill_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), ByteIoError> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Err(ByteIoError::NotEnoughBytes(buf.len(), filled)),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(ByteIoError::StdIoError(e))
        }
    }
    Ok(())
}

impl<T> ByteReaderTrait for Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        fill_exact(self, buf)
    }

    #[inline(always)]
    fn b_seek(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        let len = u64::try_from(self.get_ref().as_ref().len())?;
        Ok(self.position() >= len)
    }

    fn b_position(&mut self) -> Result<u64, ByteIoError> {
        Ok(self.position())
    }
}

impl<T: Read + Seek> ByteReaderTrait for BufReader<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        fill_exact(self, buf)
    }

    fn b_seek(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        match from {
            // seek_relative keeps the buffer when the target is inside it
            SeekFrom::Current(offset) => {
                self.seek_relative(offset)?;
                self.stream_position().map_err(ByteIoError::from)
            }
            _ => self.seek(from).map_err(ByteIoError::from)
        }
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        self.fill_buf()
            .map(|b| b.is_empty())
            .map_err(ByteIoError::from)
    }

    fn b_position(&mut self) -> Result<u64, ByteIoError> {
        self.stream_position().map_err(ByteIoError::from)
    }
}
