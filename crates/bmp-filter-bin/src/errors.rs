/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

use bmp_filter_core::BmpFilterErrors;

/// Everything that can stop the command line pipeline
///
/// All errors are fatal, each maps to its own process exit code.
pub enum FilterAppErrors {
    /// Wrong number of operands, carries the program name
    Usage(String),
    /// Could not determine the input size
    Seek(io::Error),
    /// Short read or I/O error on the input
    Read(io::Error),
    /// Could not reserve a buffer of the given size
    Allocation(usize),
    /// Short write or I/O error on the output
    Write(io::Error),
    /// The bitmap could not be filtered
    Bitmap(BmpFilterErrors)
}

impl FilterAppErrors {
    /// Process exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 1,
            Self::Seek(_) => 2,
            Self::Read(_) => 3,
            Self::Allocation(_) => 4,
            Self::Write(_) => 5,
            Self::Bitmap(_) => 6
        }
    }
}

impl Debug for FilterAppErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(program) => {
                write!(f, "Usage: {} [-g]", program)
            }
            Self::Seek(err) => {
                write!(f, "Could not seek input: {}", err)
            }
            Self::Read(err) => {
                write!(f, "Could not read input: {}", err)
            }
            Self::Allocation(size) => {
                write!(f, "Could not allocate {} bytes for the input", size)
            }
            Self::Write(err) => {
                write!(f, "Could not write output: {}", err)
            }
            Self::Bitmap(err) => {
                write!(f, "{:?}", err)
            }
        }
    }
}

impl Display for FilterAppErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for FilterAppErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Seek(err) | Self::Read(err) | Self::Write(err) => Some(err),
            Self::Bitmap(err) => Some(err),
            _ => None
        }
    }
}

impl From<BmpFilterErrors> for FilterAppErrors {
    fn from(value: BmpFilterErrors) -> Self {
        FilterAppErrors::Bitmap(value)
    }
}
