/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufWriter, ErrorKind};
use std::path::PathBuf;
use std::time::Instant;

use asciibmp::BmpDecoderErrors;
use clap::ArgMatches;
use log::{debug, info};

use crate::cmd_parsers::{get_decoder_options, get_renderer};
use crate::file_io::BmpFile;
use crate::probe_files::probe_input_file;

pub(crate) fn run_workflow_from_cmd(args: &ArgMatches) -> Result<(), BmpDecoderErrors> {
    info!("Creating workflow from input");

    let in_file = args.get_one::<PathBuf>("in").ok_or_else(|| {
        BmpDecoderErrors::OpenError(std::io::Error::new(
            ErrorKind::InvalidInput,
            "no input file given"
        ))
    })?;

    let file = BmpFile::new(in_file.clone(), get_decoder_options(args));

    if args.get_flag("probe") {
        return probe_input_file(&file);
    }

    let renderer = get_renderer(args);

    let start = Instant::now();
    let image = file.into_image()?;
    debug!("Decoding took {:?}", start.elapsed());

    let stdout = std::io::stdout();
    let mut sink = BufWriter::new(stdout.lock());

    let start = Instant::now();
    image.render_with(&renderer, &mut sink)?;
    debug!("Rendering took {:?}", start.elapsed());

    Ok(())
}
