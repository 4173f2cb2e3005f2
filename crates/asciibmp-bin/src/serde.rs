/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use asciibmp::{FileHeader, InfoHeader};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:        &'a Path,
    file_header: &'a FileHeader,
    info_header: &'a InfoHeader
}

impl<'a> Metadata<'a> {
    pub fn new(
        file: &'a Path, file_header: &'a FileHeader, info_header: &'a InfoHeader
    ) -> Metadata<'a> {
        Metadata {
            file,
            file_header,
            info_header
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_header", self.file_header)?;
        state.serialize_field("info_header", self.info_header)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use asciibmp::{FileHeader, InfoHeader};

    use super::Metadata;

    #[test]
    fn metadata_nests_headers() {
        let file_header = FileHeader {
            file_type: u16::from_le_bytes(*b"BM"),
            pixel_data_offset: 54,
            ..FileHeader::default()
        };
        let info_header = InfoHeader {
            header_size: 40,
            width: 2,
            height: 2,
            planes: 1,
            bits_per_pixel: 24,
            ..InfoHeader::default()
        };
        let metadata = Metadata::new(Path::new("a.bmp"), &file_header, &info_header);

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["file"], "a.bmp");
        assert_eq!(value["file_header"]["signature"], "BM");
        assert_eq!(value["info_header"]["bits_per_pixel"], 24);
        assert_eq!(value["info_header"]["bottom_up"], true);
    }
}
