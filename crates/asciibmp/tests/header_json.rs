/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde")]

use std::io::Cursor;

use asciibmp::asciibmp_core::bytestream::ByteReader;
use asciibmp::read_headers;

mod common;

use common::{pattern, BmpBuilder};

#[test]
fn headers_serialize_to_json() {
    let bytes = BmpBuilder::new(3, -2, 32).build(&pattern(6));
    let (file_header, info_header) = read_headers(&mut ByteReader::new(Cursor::new(bytes))).unwrap();

    let file = serde_json::to_value(file_header).unwrap();
    assert_eq!(file["signature"], "BM");
    assert_eq!(file["pixel_data_offset"], 54);

    let info = serde_json::to_value(info_header).unwrap();
    assert_eq!(info["width"], 3);
    assert_eq!(info["height"], -2);
    assert_eq!(info["bottom_up"], false);
    assert_eq!(info["bits_per_pixel"], 32);
    assert_eq!(info["compression"], "RGB");
    assert_eq!(info["pixel_format"], "BGRA");
}
