/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors that can occur when interpreting a bitmap
/// buffer or walking its pixel array
#[non_exhaustive]
pub enum BmpFilterErrors {
    /// The buffer is too small, expected at least
    /// a size but got another size
    TooSmallBuffer(usize, usize),
    /// Header failed plausibility checks while in strict mode
    MalformedHeader(&'static str),
    /// A size calculation overflowed
    OverFlowOccurred
}

impl Debug for BmpFilterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooSmallBuffer(expected, found) => {
                writeln!(
                    f,
                    "Too small of buffer, expected {} but found {}",
                    expected, found
                )
            }
            Self::MalformedHeader(reason) => {
                writeln!(f, "Malformed bitmap header: {}", reason)
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
        }
    }
}

impl Display for BmpFilterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        // Debug already produces the human readable form
        write!(f, "{:?}", self)
    }
}

impl core::error::Error for BmpFilterErrors {}
