/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::{value_parser, Arg, ArgAction, Command};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("bmp-filter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Apply a grayscale or black and white filter to a 24-bit BMP read from standard input")
        .override_usage("bmp-filter [-g] < in.bmp > out.bmp")
        .after_help(help_strings::EXIT_CODES_HELP)
        .arg(Arg::new("grayscale")
            .short('g')
            .long("grayscale")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Convert the image to grayscale instead of black and white"))
        .arg(Arg::new("operand")
            .action(ArgAction::Append)
            .value_parser(value_parser!(OsString))
            .allow_hyphen_values(true)
            .hide(true))
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
            .help("Display information about the filter pass"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Refuse headers that do not look like a 24-bit uncompressed bitmap"))
        .arg(Arg::new("legacy-stride")
            .long("legacy-stride")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Advance rows without padding")
            .long_help(help_strings::LEGACY_STRIDE_HELP))
        .arg(Arg::new("honor-offset")
            .long("honor-offset")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Locate pixels using the header's data offset instead of byte 54"))
        .arg(Arg::new("stream")
            .long("stream")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Read standard input to its end instead of seeking")
            .long_help(help_strings::STREAM_HELP))
}
