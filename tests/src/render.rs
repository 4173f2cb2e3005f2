/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::io::Cursor;

use asciibmp::{AsciiRenderer, BmpImage};
use asciibmp_core::options::DecoderOptions;

use crate::{sample_path, TestEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_render_cases() {
    let file = sample_path().join("render.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();
    assert!(!entries.is_empty());

    let renderer = AsciiRenderer::new();
    let mut failures = Vec::new();

    for entry in &entries {
        let options = DecoderOptions::default().set_honor_row_padding(entry.padded_rows);
        let mut image = BmpImage::with_options(options);

        let result = image.open_from(Cursor::new(entry.encode()));

        match (result, entry.exit_code) {
            (Ok(()), None) => {
                let lines = renderer.render_lines(&image).unwrap();
                if lines != entry.expected {
                    failures.push(format!(
                        "{}: expected {:?} but rendered {:?}",
                        entry.name, entry.expected, lines
                    ));
                }
            }
            (Err(err), Some(code)) => {
                if err.exit_code() != code || image.is_open() {
                    failures.push(format!(
                        "{}: expected exit code {} but failed with {:?}",
                        entry.name, code, err
                    ));
                }
            }
            (Ok(()), Some(code)) => {
                failures.push(format!(
                    "{}: opened but should fail with exit code {}",
                    entry.name, code
                ));
            }
            (Err(err), None) => {
                failures.push(format!("{}: unexpected error {:?}", entry.name, err));
            }
        }
    }
    if !failures.is_empty() {
        panic!("Errors found during rendering\n {:#?}", failures);
    }
}
