/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Interpretation of the fixed BMP file and info headers
//!
//! Only three fields are needed to walk the pixel array,
//! the data offset at byte 10, the width at byte 18 and the
//! height at byte 22. Everything else is read only to decide
//! whether the header looks like a 24-bit uncompressed
//! `BITMAPINFOHEADER` bitmap.

use log::{trace, warn};

use crate::errors::BmpFilterErrors;
use crate::options::FilterOptions;

/// Size of the `BM` file header
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of a `BITMAPINFOHEADER`
pub const INFO_HEADER_SIZE: usize = 40;
/// Where the pixel array starts when there is no palette or
/// bitfield block between the headers and the pixels
pub const PIXEL_ARRAY_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

// end of the height field, the last one we must be able to read
const MIN_HEADER_BYTES: usize = 26;

/// Outcome of the header plausibility checks
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HeaderCheck {
    /// Everything we can verify about the header agrees with
    /// an uncompressed 24-bit bitmap
    Trusted,
    /// One of the checks failed, the reason is the first failure
    Malformed(&'static str)
}

/// A read only view over the header fields of a bitmap buffer
#[derive(Copy, Clone, Debug)]
pub struct BmpHeader {
    data_offset: u32,
    width:       i32,
    height:      i32,
    check:       HeaderCheck
}

impl BmpHeader {
    /// Read the header fields out of `bytes`
    ///
    /// The buffer must at least hold the width and height fields,
    /// otherwise [`BmpFilterErrors::TooSmallBuffer`] is returned.
    ///
    /// In strict mode a header failing the plausibility checks is
    /// returned as [`BmpFilterErrors::MalformedHeader`], otherwise the
    /// failure is logged and recorded in [`BmpHeader::check`].
    pub fn parse(bytes: &[u8], options: &FilterOptions) -> Result<BmpHeader, BmpFilterErrors> {
        let too_small = || BmpFilterErrors::TooSmallBuffer(MIN_HEADER_BYTES, bytes.len());

        let data_offset = read_u32_le(bytes, 10).ok_or_else(too_small)?;
        let width = read_i32_le(bytes, 18).ok_or_else(too_small)?;
        let height = read_i32_le(bytes, 22).ok_or_else(too_small)?;

        trace!("Data offset: {}", data_offset);
        trace!("Width: {}", width);
        trace!("Height: {}", height);

        let check = check_plausibility(bytes, data_offset, width, height);

        if let HeaderCheck::Malformed(reason) = check {
            if options.get_strict_mode() {
                return Err(BmpFilterErrors::MalformedHeader(reason));
            }
            warn!("Malformed bitmap header ({}), continuing anyway", reason);
        }

        Ok(BmpHeader {
            data_offset,
            width,
            height,
            check
        })
    }

    /// The pixel array offset stored in the file header
    pub const fn data_offset(&self) -> u32 {
        self.data_offset
    }

    /// Width as stored, may be negative for broken files
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height as stored, negative for top-down bitmaps
    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn check(&self) -> HeaderCheck {
        self.check
    }

    pub const fn is_top_down(&self) -> bool {
        self.height < 0
    }

    /// Number of pixels the walker visits in each row
    ///
    /// A negative width yields zero pixels.
    pub fn row_pixels(&self) -> usize {
        usize::try_from(self.width).unwrap_or(0)
    }

    /// Number of rows the walker visits
    pub fn rows(&self) -> usize {
        self.height.unsigned_abs() as usize
    }

    /// Byte offset of the first pixel inside the buffer
    pub fn pixel_array_start(&self, options: &FilterOptions) -> usize {
        if options.get_honor_data_offset() {
            self.data_offset as usize
        } else {
            PIXEL_ARRAY_OFFSET
        }
    }
}

fn check_plausibility(bytes: &[u8], data_offset: u32, width: i32, height: i32) -> HeaderCheck {
    if bytes.get(0..2) != Some(b"BM".as_slice()) {
        return HeaderCheck::Malformed("file does not start with BM");
    }
    if width <= 0 {
        return HeaderCheck::Malformed("width is zero or negative");
    }
    if height == 0 {
        return HeaderCheck::Malformed("height is zero");
    }
    if (data_offset as usize) < PIXEL_ARRAY_OFFSET {
        return HeaderCheck::Malformed("pixel data offset overlaps the headers");
    }
    match read_u32_le(bytes, FILE_HEADER_SIZE) {
        Some(size) if (size as usize) < INFO_HEADER_SIZE => {
            return HeaderCheck::Malformed("info header smaller than BITMAPINFOHEADER");
        }
        None => return HeaderCheck::Malformed("truncated info header"),
        _ => {}
    }
    match read_u16_le(bytes, 28) {
        Some(24) => {}
        Some(_) => return HeaderCheck::Malformed("bit depth is not 24"),
        None => return HeaderCheck::Malformed("truncated info header")
    }
    match read_u32_le(bytes, 30) {
        Some(0) => {}
        Some(_) => return HeaderCheck::Malformed("compressed bitmaps are not supported"),
        None => return HeaderCheck::Malformed("truncated info header")
    }
    HeaderCheck::Trusted
}

#[inline]
fn read_u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    bytes
        .get(offset..offset + 2)
        .and_then(|s| s.try_into().ok())
        .map(u16::from_le_bytes)
}

#[inline]
fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    bytes
        .get(offset..offset + 4)
        .and_then(|s| s.try_into().ok())
        .map(u32::from_le_bytes)
}

#[inline]
fn read_i32_le(bytes: &[u8], offset: usize) -> Option<i32> {
    bytes
        .get(offset..offset + 4)
        .and_then(|s| s.try_into().ok())
        .map(i32::from_le_bytes)
}
