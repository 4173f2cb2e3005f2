/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use asciibmp::headers::{FILE_HEADER_SIZE, INFO_HEADER_SIZE};
use asciibmp::{probe_bmp, read_headers, BmpDecoderErrors, BmpImage, FileHeader, InfoHeader};
use asciibmp_core::bytestream::ByteReader;
use asciibmp_core::options::DecoderOptions;
use log::warn;

pub struct BmpFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl BmpFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> BmpFile {
        BmpFile { file_path, options }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Open and fully decode the file
    pub fn into_image(self) -> Result<BmpImage, BmpDecoderErrors> {
        let mut image = BmpImage::with_options(self.options);
        image.open(&self.file_path)?;

        Ok(image)
    }

    /// Read only the two headers, without validating them
    pub fn read_headers(&self) -> Result<(FileHeader, InfoHeader), BmpDecoderErrors> {
        const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

        let file = File::open(&self.file_path).map_err(BmpDecoderErrors::OpenError)?;

        let mut prefix = Vec::with_capacity(HEADERS_SIZE);
        file.take(HEADERS_SIZE as u64)
            .read_to_end(&mut prefix)
            .map_err(|e| BmpDecoderErrors::ReadError(e.into()))?;

        if !probe_bmp(&prefix) {
            warn!(
                "{} does not look like a Windows BMP file",
                self.file_path.display()
            );
        }

        read_headers(&mut ByteReader::new(Cursor::new(prefix)))
    }
}
