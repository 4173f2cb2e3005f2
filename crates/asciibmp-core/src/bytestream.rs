/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A simple implementation of a bytestream reader
//!
//! The reader wraps anything implementing [`ByteReaderTrait`] and exposes
//! fixed width little endian reads, all of which report a short read as an error
//! instead of silently padding with zeroes.

pub use reader::{ByteIoError, ByteReader};
pub use traits::ByteReaderTrait;

mod reader;
mod traits;
