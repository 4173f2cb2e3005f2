/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("asciibmp")
        .about("Print a 24 or 32 bit BMP image as ASCII art")
        .after_help("Exit status: 0 success, 2 usage error, 3 can't open, 4 unsupported format,\n5 read error, 6 nothing to display, 7 invalid header, 8 output error")
        .arg(Arg::new("in")
            .help("Input BMP file to read data from")
            .value_name("INPUT")
            .value_parser(value_parser!(std::path::PathBuf))
            .required(true))
        .arg(Arg::new("white")
            .long("white")
            .help_heading("RENDERING")
            .help("Glyph used for pure white pixels")
            .value_parser(value_parser!(char))
            .default_value("X"))
        .arg(Arg::new("black")
            .long("black")
            .help_heading("RENDERING")
            .help("Glyph used for every other pixel")
            .value_parser(value_parser!(char))
            .default_value("."))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the image headers as JSON instead of rendering")
            .long_help("Read only the file and info headers and print them as JSON.\nHeaders are printed even if the image uses a format that can't be rendered"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject files without a BM signature or with compressed data"))
        .arg(Arg::new("padded-rows")
            .long("padded-rows")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Skip the padding that rounds stored rows to four bytes")
            .long_help("Rows are read tightly packed by default.\nEnable this for files that pad every row to a multiple of four bytes"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Largest image width to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Largest image height to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}
