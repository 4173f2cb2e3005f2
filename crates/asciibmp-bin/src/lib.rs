/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::debug;

use crate::workflow::run_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod file_io;
mod probe_files;
mod serde;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    if let Err(err) = run_workflow_from_cmd(&options) {
        debug!("Could not complete workflow, reason {:?}", err);
        // stdout carries the picture, keep the message off it
        eprintln!("{err}");
        exit(err.exit_code());
    }
}
