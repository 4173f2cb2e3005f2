/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use asciibmp_core::bytestream::ByteReaderTrait;
use asciibmp_core::options::DecoderOptions;
use log::debug;

use crate::decoder::BmpDecoder;
use crate::errors::BmpDecoderErrors;
use crate::headers::{FileHeader, InfoHeader};
use crate::pixel::Pixel;
use crate::render::AsciiRenderer;

/// Everything an open image holds, present as a whole or not at all
pub(crate) struct DecodedImage {
    pub(crate) file_header: FileHeader,
    pub(crate) info_header: InfoHeader,
    pub(crate) pixels:      Vec<Pixel>
}

impl DecodedImage {
    /// Pixels per row, always positive for a decoded image
    pub(crate) fn width(&self) -> usize {
        self.info_header.width.unsigned_abs() as usize
    }
}

/// A BMP image that can be opened, rendered and closed.
///
/// The image is either closed (no headers, no pixels) or open (both headers
/// and exactly `width * |height|` pixels). A failed [`open`](Self::open)
/// always leaves it closed.
#[derive(Default)]
pub struct BmpImage {
    options: DecoderOptions,
    state:   Option<DecodedImage>
}

impl BmpImage {
    /// Create a closed image with default decoder options
    pub fn new() -> BmpImage {
        BmpImage::default()
    }

    /// Create a closed image that decodes with `options`
    pub fn with_options(options: DecoderOptions) -> BmpImage {
        BmpImage {
            options,
            state: None
        }
    }

    /// Open and decode the BMP file at `path`, replacing any open image.
    ///
    /// # Errors
    /// - `OpenError` if the file can't be opened for reading
    /// - any error from [`open_from`](Self::open_from)
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BmpDecoderErrors> {
        self.close();

        let path = path.as_ref();
        debug!("Opening {}", path.display());

        let file = File::open(path).map_err(BmpDecoderErrors::OpenError)?;
        // the file is closed when the reader drops, on every path out of here
        self.open_from(BufReader::new(file))
    }

    /// Decode an image from `source`, replacing any open image.
    ///
    /// The source should be positioned at the start of the BMP data.
    pub fn open_from<T: ByteReaderTrait>(&mut self, source: T) -> Result<(), BmpDecoderErrors> {
        self.close();

        let mut decoder = BmpDecoder::new_with_options(source, self.options);
        let (file_header, info_header) = decoder.decode_headers()?;
        let pixels = decoder.decode()?;

        debug!(
            "Decoded {}x{} image, {} pixels",
            info_header.width,
            info_header.height,
            pixels.len()
        );

        self.state = Some(DecodedImage {
            file_header,
            info_header,
            pixels
        });
        Ok(())
    }

    /// Release all decoded state, calling it on a closed image does nothing
    pub fn close(&mut self) {
        if self.state.take().is_some() {
            debug!("Closed image");
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// The options used when decoding
    pub const fn options(&self) -> &DecoderOptions {
        &self.options
    }

    pub fn file_header(&self) -> Option<&FileHeader> {
        self.state.as_ref().map(|s| &s.file_header)
    }

    pub fn info_header(&self) -> Option<&InfoHeader> {
        self.state.as_ref().map(|s| &s.info_header)
    }

    /// Decoded pixels in the order they were stored in the file
    ///
    /// Empty when the image is closed
    pub fn pixels(&self) -> &[Pixel] {
        match &self.state {
            Some(decoded) => decoded.pixels.as_slice(),
            None => &[]
        }
    }

    /// Width and number of rows of the open image
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.state
            .as_ref()
            .map(|s| (s.width(), s.info_header.row_count()))
    }

    pub(crate) fn decoded(&self) -> Option<&DecodedImage> {
        self.state.as_ref()
    }

    /// Render the image to standard output with the default glyphs
    ///
    /// # Errors
    /// `NotOpen` if no image has been successfully opened
    pub fn render(&self) -> Result<(), BmpDecoderErrors> {
        if !self.is_open() {
            return Err(BmpDecoderErrors::NotOpen);
        }
        let stdout = std::io::stdout();
        let mut sink = BufWriter::new(stdout.lock());

        self.render_to(&mut sink)
    }

    /// Render the image to `sink` with the default glyphs
    pub fn render_to<W: Write>(&self, sink: &mut W) -> Result<(), BmpDecoderErrors> {
        self.render_with(&AsciiRenderer::default(), sink)
    }

    /// Render the image to `sink` using `renderer`
    pub fn render_with<W: Write>(
        &self, renderer: &AsciiRenderer, sink: &mut W
    ) -> Result<(), BmpDecoderErrors> {
        renderer.render(self, sink)
    }
}
