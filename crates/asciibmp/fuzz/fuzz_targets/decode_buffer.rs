/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use std::io::{sink, Cursor};

use asciibmp::asciibmp_core::options::DecoderOptions;
use asciibmp::BmpImage;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // keep allocations small, the fuzzer controls the dimensions
    let options = DecoderOptions::default()
        .set_max_width(1024)
        .set_max_height(1024);

    let mut image = BmpImage::with_options(options);
    if image.open_from(Cursor::new(data)).is_ok() {
        let _ = image.render_to(&mut sink());
    }
});
