/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global decoder options

/// Largest width or height accepted by default
const DEFAULT_MAX_DIMENSION: usize = 1 << 14;

/// Decoder options
///
/// Not all options are respected by every operation, e.g. header
/// probing ignores the dimension limits.
///
/// # Example
/// ```
/// use asciibmp_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(1024)
///     .set_strict_mode(true);
///
/// assert_eq!(options.max_width(), 1024);
/// assert!(options.strict_mode());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:         usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:        usize,
    /// Reject files that do not start with `BM` or that
    /// declare a compression scheme
    ///
    /// - Default value: false
    strict_mode:       bool,
    /// Skip the bytes that pad every stored row to a multiple of four.
    ///
    /// When false, rows are assumed to be tightly packed.
    ///
    /// - Default value: false
    honor_row_padding: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:         DEFAULT_MAX_DIMENSION,
            max_height:        DEFAULT_MAX_DIMENSION,
            strict_mode:       false,
            honor_row_padding: false
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// and reject files that merely look like BMP images
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Return true if row stride padding is skipped when decoding
    pub const fn honor_row_padding(&self) -> bool {
        self.honor_row_padding
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in strict mode
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Set whether rows are padded to a four byte boundary in the source
    pub fn set_honor_row_padding(mut self, yes: bool) -> Self {
        self.honor_row_padding = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::options::DecoderOptions;

    #[test]
    fn defaults_are_lenient() {
        let options = DecoderOptions::default();

        assert_eq!(options.max_width(), 16384);
        assert_eq!(options.max_height(), 16384);
        assert!(!options.strict_mode());
        assert!(!options.honor_row_padding());
    }

    #[test]
    fn setters_chain() {
        let options = DecoderOptions::default()
            .set_max_height(10)
            .set_honor_row_padding(true);

        assert_eq!(options.max_height(), 10);
        assert_eq!(options.max_width(), 16384);
        assert!(options.honor_row_padding());
    }
}
