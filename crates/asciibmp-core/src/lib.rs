/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the asciibmp crates
//!
//! It currently contains
//!
//! - A bytestream reader with little endian aware reads
//!   over anything that implements [`ByteReaderTrait`](bytestream::ByteReaderTrait)
//! - Decoder options, see [`DecoderOptions`](options::DecoderOptions)
//!

pub mod bytestream;
pub mod options;
