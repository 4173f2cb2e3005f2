/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde")]

use serde::ser::*;

use crate::headers::{FileHeader, InfoHeader};

impl Serialize for FileHeader {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("FileHeader", 6)?;

        let magic = self.file_type.to_le_bytes();
        state.serialize_field("file_type", &format!("{:#06x}", self.file_type))?;
        state.serialize_field("signature", &String::from_utf8_lossy(&magic))?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("reserved1", &self.reserved1)?;
        state.serialize_field("reserved2", &self.reserved2)?;
        state.serialize_field("pixel_data_offset", &self.pixel_data_offset)?;

        state.end()
    }
}

impl Serialize for InfoHeader {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("InfoHeader", 13)?;

        state.serialize_field("header_size", &self.header_size)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("bottom_up", &self.is_bottom_up())?;
        state.serialize_field("planes", &self.planes)?;
        state.serialize_field("bits_per_pixel", &self.bits_per_pixel)?;
        // compression and pixel format serialize as their debug value
        match self.compression_scheme() {
            Some(scheme) => state.serialize_field("compression", &format!("{:?}", scheme))?,
            None => state.serialize_field("compression", &self.compression)?
        }
        state.serialize_field("image_size", &self.image_size)?;
        state.serialize_field("x_pixels_per_meter", &self.x_pixels_per_meter)?;
        state.serialize_field("y_pixels_per_meter", &self.y_pixels_per_meter)?;
        state.serialize_field("colors_used", &self.colors_used)?;
        state.serialize_field("colors_important", &self.colors_important)?;
        match self.pixel_format() {
            Some(pix_fmt) => state.serialize_field("pixel_format", &format!("{:?}", pix_fmt))?,
            None => state.serialize_field("pixel_format", &Option::<&str>::None)?
        }

        state.end()
    }
}
