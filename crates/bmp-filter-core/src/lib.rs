/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! In place pixel filters for raw BMP buffers
//!
//! This crate takes the bytes of a whole bitmap file, finds the pixel
//! array through the fixed file and info headers and rewrites every
//! pixel with one of two filters, leaving the headers and the buffer
//! length untouched.
//!
//! # Features
//! - `no_std` by default with `alloc`
//! - Bounds checked, a header claiming more pixels than the buffer holds
//!   is an error, never an out of range access
//! - `threads`: walk bands of rows on scoped threads
//!
//! # Supported formats
//! - Uncompressed 24-bit bitmaps with a `BITMAPINFOHEADER`
//!
//! # Usage
//! ```
//! use bmp_filter_core::{apply_filter, FilterMode, FilterOptions};
//!
//! fn filter(file: &mut [u8]) -> Result<(), bmp_filter_core::BmpFilterErrors> {
//!     let report = apply_filter(file, FilterMode::Grayscale, FilterOptions::default())?;
//!     println!("Filtered {} pixels", report.pixels_visited);
//!     Ok(())
//! }
//! ```

#![no_std]
extern crate alloc;
#[cfg(feature = "threads")]
extern crate std;

use log::debug;

pub use crate::errors::BmpFilterErrors;
pub use crate::filter::{intensity, FilterMode, THRESHOLD_LEVEL};
pub use crate::header::{BmpHeader, HeaderCheck, PIXEL_ARRAY_OFFSET};
pub use crate::options::{FilterOptions, RowStride};
pub use crate::walker::{row_padding, PixelWalker};

mod errors;
pub mod filter;
mod header;
mod options;
mod walker;

/// What a filter pass found and did
#[derive(Copy, Clone, Debug)]
pub struct FilterReport {
    /// The header the pass was driven by
    pub header:         BmpHeader,
    /// Number of pixels rewritten, `width * |height|` on success
    pub pixels_visited: usize
}

/// Interpret the headers of `buffer` and run `mode` over every pixel
///
/// The buffer keeps its length, only pixel bytes are written.
///
/// # Errors
/// - [`BmpFilterErrors::TooSmallBuffer`] if the buffer cannot hold the
///   header fields or the pixel array they describe
/// - [`BmpFilterErrors::MalformedHeader`] in strict mode
/// - [`BmpFilterErrors::OverFlowOccurred`] for absurd dimensions
///
/// On error no pixel has been modified.
pub fn apply_filter(
    buffer: &mut [u8], mode: FilterMode, options: FilterOptions
) -> Result<FilterReport, BmpFilterErrors> {
    let header = BmpHeader::parse(buffer, &options)?;
    let walker = PixelWalker::new(&header, &options)?;

    if header.is_top_down() {
        debug!("Negative height, treating as a top-down bitmap");
    }

    debug!(
        "Applying {} filter to {}x{} image, row stride {} bytes",
        mode.get_name(),
        walker.row_pixels(),
        walker.rows(),
        walker.stride()
    );

    let pixels_visited = walker.apply(buffer, mode)?;

    debug!("Visited {} pixels", pixels_visited);

    Ok(FilterReport {
        header,
        pixels_visited
    })
}
