/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use bmp_filter_core::{FilterMode, FilterOptions, RowStride};
use clap::ArgMatches;
use log::{info, Level};

use crate::cmd_parsers::get_filter_mode;

/// How the input buffer is filled
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReadMode {
    /// Seek to the end of the input to learn its size, then
    /// read exactly that many bytes
    Seek,
    /// Read until end of file
    Stream
}

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub mode:           FilterMode,
    pub read_mode:      ReadMode,
    pub filter_options: FilterOptions
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            mode:           FilterMode::Threshold,
            read_mode:      ReadMode::Seek,
            filter_options: FilterOptions::default()
        }
    }
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions::new()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.mode = get_filter_mode(options);
    info!("Filter mode: {}", cmd_options.mode.get_name());

    if options.get_flag("stream") {
        info!("Reading input as a stream");
        cmd_options.read_mode = ReadMode::Stream;
    }
    if options.get_flag("strict") {
        info!("Rejecting malformed headers");
        cmd_options.filter_options = cmd_options.filter_options.set_strict_mode(true);
    }
    if options.get_flag("legacy-stride") {
        info!("Using legacy row stride, padding is not skipped");
        cmd_options.filter_options = cmd_options
            .filter_options
            .set_row_stride(RowStride::Packed);
    }
    if options.get_flag("honor-offset") {
        info!("Locating pixels via the header data offset");
        cmd_options.filter_options = cmd_options.filter_options.set_honor_data_offset(true);
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    // a logger may already be installed when running more than one
    // pipeline in the same process
    if simple_logger::init_with_level(log_level).is_err() {
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
