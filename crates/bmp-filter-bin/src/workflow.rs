/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{self, Read, Seek, Write};

use bmp_filter_core::{apply_filter, FilterReport, HeaderCheck};
use log::{info, warn};

use crate::cmd_parsers::global_options::{CmdOptions, ReadMode};
use crate::errors::FilterAppErrors;
use crate::file_io::{read_seekable, read_stream, stdin_file, write_buffer};

/// Load standard input, filter it and write it to standard output
pub(crate) fn create_and_exec_workflow_from_cmd(
    cmd_opts: &CmdOptions
) -> Result<FilterReport, FilterAppErrors> {
    info!("Creating workflow from standard input");

    let mut buffer = match cmd_opts.read_mode {
        ReadMode::Seek => {
            let mut stdin = stdin_file().map_err(FilterAppErrors::Seek)?;
            read_seekable(&mut stdin)?
        }
        ReadMode::Stream => read_stream(&mut io::stdin().lock())?
    };

    let report = filter_buffer(&mut buffer, cmd_opts)?;
    write_buffer(&mut io::stdout().lock(), &buffer)?;

    Ok(report)
}

/// Run the whole pipeline over an arbitrary input and output
///
/// The input is loaded the way `cmd_opts.read_mode` says.
pub fn exec_workflow<R, W>(
    input: &mut R, output: &mut W, cmd_opts: &CmdOptions
) -> Result<FilterReport, FilterAppErrors>
where
    R: Read + Seek,
    W: Write
{
    let mut buffer = match cmd_opts.read_mode {
        ReadMode::Seek => read_seekable(input)?,
        ReadMode::Stream => read_stream(input)?
    };

    let report = filter_buffer(&mut buffer, cmd_opts)?;
    write_buffer(output, &buffer)?;

    Ok(report)
}

/// Filter a loaded buffer in place
pub fn filter_buffer(
    buffer: &mut [u8], cmd_opts: &CmdOptions
) -> Result<FilterReport, FilterAppErrors> {
    let length = buffer.len();
    let report = apply_filter(buffer, cmd_opts.mode, cmd_opts.filter_options)?;

    if let HeaderCheck::Malformed(reason) = report.header.check() {
        warn!("Filtered a bitmap with a suspicious header: {}", reason);
    }
    info!(
        "{} filter rewrote {} pixels of a {} byte file",
        cmd_opts.mode.get_name(),
        report.pixels_visited,
        length
    );

    Ok(report)
}
