/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::process::exit;

use clap::error::ErrorKind;
use log::{debug, error};

pub use crate::cmd_parsers::global_options::{CmdOptions, ReadMode};
pub use crate::errors::FilterAppErrors;
pub use crate::workflow::{exec_workflow, filter_buffer};

mod cmd_args;
mod cmd_parsers;
pub mod errors;
pub mod file_io;
mod workflow;

const PROGRAM_NAME: &str = "bmp-filter";

pub fn main() {
    if let Err(err) = run(std::env::args_os()) {
        match err {
            FilterAppErrors::Usage(_) => println!("{:?}", err),
            _ => error!("Could not complete workflow, reason {:?}", err)
        }
        exit(err.exit_code());
    }
}

/// Parse `args`, then filter standard input into standard output
pub fn run<I, T>(args: I) -> Result<(), FilterAppErrors>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone
{
    let cmd_opts = parse_cmd_args(args)?;

    workflow::create_and_exec_workflow_from_cmd(&cmd_opts)?;
    Ok(())
}

/// Turn command line arguments into options, setting up the logger
/// on the way
///
/// More than one operand or repeated flags are [`FilterAppErrors::Usage`].
/// Unknown dash prefixed words such as `-x` are operands, not errors.
/// Help and version requests print and exit the process.
pub fn parse_cmd_args<I, T>(args: I) -> Result<CmdOptions, FilterAppErrors>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let program = args
        .peek()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_else(|| PROGRAM_NAME.to_string());

    let options = match cmd_args::create_cmd_args().try_get_matches_from(args) {
        Ok(options) => options,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            debug!("Argument parsing failed: {}", err);
            return Err(FilterAppErrors::Usage(program));
        }
    };

    if cmd_parsers::count_operands(&options) > 1 {
        return Err(FilterAppErrors::Usage(program));
    }

    cmd_parsers::global_options::setup_logger(&options);

    Ok(cmd_parsers::global_options::parse_options(&options))
}
