/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use asciibmp::BmpDecoderErrors;
use log::info;

use crate::file_io::BmpFile;
use crate::serde::Metadata;

/// Read the headers of `file` and print them as JSON to standard output.
pub fn probe_input_file(file: &BmpFile) -> Result<(), BmpDecoderErrors> {
    info!("Probing {}", file.path().display());

    let (file_header, info_header) = file.read_headers()?;
    let metadata = Metadata::new(file.path(), &file_header, &info_header);

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    serde_json::to_writer_pretty(&mut sink, &metadata)
        .map_err(|e| BmpDecoderErrors::OutputError(e.into()))?;
    writeln!(sink).map_err(BmpDecoderErrors::OutputError)
}
