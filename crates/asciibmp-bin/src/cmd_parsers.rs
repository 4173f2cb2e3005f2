/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use asciibmp::AsciiRenderer;
use asciibmp_core::options::DecoderOptions;
use clap::ArgMatches;
use log::info;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let defaults = DecoderOptions::default();

    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.max_width());
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.max_height());
    let strict_mode = options.get_flag("strict");
    let honor_row_padding = options.get_flag("padded-rows");

    info!("Maximum dimensions: {}x{}", max_width, max_height);
    if strict_mode {
        info!("Strict mode enabled");
    }
    if honor_row_padding {
        info!("Skipping row padding");
    }

    defaults
        .set_max_width(max_width)
        .set_max_height(max_height)
        .set_strict_mode(strict_mode)
        .set_honor_row_padding(honor_row_padding)
}

pub fn get_renderer(options: &ArgMatches) -> AsciiRenderer {
    let mut renderer = AsciiRenderer::new();

    if let Some(white) = options.get_one::<char>("white") {
        renderer = renderer.set_white(*white);
    }
    if let Some(black) = options.get_one::<char>("black") {
        renderer = renderer.set_black(*black);
    }
    renderer
}
