/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Row and pixel traversal of the pixel array
//!
//! Rows are visited in stored order (no vertical flip), pixels
//! within a row left to right. Each row holds `width * 3` bytes of
//! BGR data followed by padding up to a multiple of four bytes.

use log::trace;

use crate::errors::BmpFilterErrors;
use crate::filter::FilterMode;
use crate::header::BmpHeader;
use crate::options::{FilterOptions, RowStride};

const BYTES_PER_PIXEL: usize = 3;

/// Padding needed to bring `row_bytes` to a multiple of 4
pub const fn row_padding(row_bytes: usize) -> usize {
    (4 - (row_bytes % 4)) % 4
}

/// Geometry of a pixel array inside a raw bitmap buffer
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PixelWalker {
    start:      usize,
    rows:       usize,
    row_pixels: usize,
    row_bytes:  usize,
    stride:     usize
}

impl PixelWalker {
    /// Compute the walk geometry described by `header`
    ///
    /// # Errors
    /// - [`BmpFilterErrors::OverFlowOccurred`] if the row size does not fit
    ///   in a `usize`
    pub fn new(header: &BmpHeader, options: &FilterOptions) -> Result<PixelWalker, BmpFilterErrors> {
        PixelWalker::from_dimensions(
            header.pixel_array_start(options),
            header.row_pixels(),
            header.rows(),
            options.get_row_stride()
        )
    }

    pub fn from_dimensions(
        start: usize, row_pixels: usize, rows: usize, stride: RowStride
    ) -> Result<PixelWalker, BmpFilterErrors> {
        let row_bytes = row_pixels
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(BmpFilterErrors::OverFlowOccurred)?;

        let stride = match stride {
            RowStride::Padded => row_bytes
                .checked_add(row_padding(row_bytes))
                .ok_or(BmpFilterErrors::OverFlowOccurred)?,
            RowStride::Packed => row_bytes
        };

        Ok(PixelWalker {
            start,
            rows,
            row_pixels,
            row_bytes,
            stride
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn row_pixels(&self) -> usize {
        self.row_pixels
    }

    /// Bytes of pixel data in one row, excluding padding
    pub const fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// Distance in bytes between the starts of two consecutive rows
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of pixels a full walk visits
    pub fn pixel_count(&self) -> usize {
        self.row_pixels.saturating_mul(self.rows)
    }

    /// Minimum buffer length for the walk to stay in bounds
    ///
    /// The last row does not need its padding. Returns zero
    /// when there is nothing to visit.
    pub fn required_len(&self) -> Result<usize, BmpFilterErrors> {
        if self.rows == 0 || self.row_bytes == 0 {
            return Ok(0);
        }
        (self.rows - 1)
            .checked_mul(self.stride)
            .and_then(|x| x.checked_add(self.row_bytes))
            .and_then(|x| x.checked_add(self.start))
            .ok_or(BmpFilterErrors::OverFlowOccurred)
    }

    /// Borrow the part of `buffer` the walk touches
    fn pixel_array_mut<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], BmpFilterErrors> {
        let end = self.required_len()?;

        if end == 0 {
            return Ok(&mut buffer[..0]);
        }
        if buffer.len() < end {
            return Err(BmpFilterErrors::TooSmallBuffer(end, buffer.len()));
        }
        Ok(&mut buffer[self.start..end])
    }

    /// Call `func` on every pixel, returning how many were visited
    ///
    /// The buffer is checked before any pixel is touched, so on
    /// error it is left unmodified.
    pub fn walk<F>(&self, buffer: &mut [u8], mut func: F) -> Result<usize, BmpFilterErrors>
    where
        F: FnMut(&mut [u8; 3])
    {
        let pixels = self.pixel_array_mut(buffer)?;

        if pixels.is_empty() {
            return Ok(0);
        }
        Ok(walk_rows(pixels, self.stride, self.row_bytes, &mut func))
    }

    /// Run `mode` over every pixel, returning how many were visited
    pub fn apply(&self, buffer: &mut [u8], mode: FilterMode) -> Result<usize, BmpFilterErrors> {
        #[cfg(not(feature = "threads"))]
        {
            trace!("Running {} filter in single threaded mode", mode.get_name());
            self.walk(buffer, |pixel| mode.apply(pixel))
        }
        #[cfg(feature = "threads")]
        {
            trace!("Running {} filter in multithreaded mode", mode.get_name());
            self.apply_threaded(buffer, mode)
        }
    }

    #[cfg(feature = "threads")]
    fn apply_threaded(&self, buffer: &mut [u8], mode: FilterMode) -> Result<usize, BmpFilterErrors> {
        let pixels = self.pixel_array_mut(buffer)?;

        if pixels.is_empty() {
            return Ok(0);
        }
        let threads = std::thread::available_parallelism()
            .map(|x| x.get())
            .unwrap_or(1);

        // contiguous bands of whole rows, the padding of a band's last
        // row belongs to that band
        let band_rows = self.rows.div_ceil(threads).max(1);
        let band_bytes = band_rows.saturating_mul(self.stride);

        let (stride, row_bytes) = (self.stride, self.row_bytes);

        let visited = std::thread::scope(|s| {
            let handles: alloc::vec::Vec<_> = pixels
                .chunks_mut(band_bytes)
                .map(|band| {
                    s.spawn(move || {
                        walk_rows(band, stride, row_bytes, &mut |p: &mut [u8; 3]| {
                            mode.apply(p)
                        })
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .sum::<usize>()
        });
        Ok(visited)
    }
}

/// Visit the rows of `pixels`, which starts at a row boundary
fn walk_rows<F>(pixels: &mut [u8], stride: usize, row_bytes: usize, func: &mut F) -> usize
where
    F: FnMut(&mut [u8; 3])
{
    let mut visited = 0;

    for row in pixels.chunks_mut(stride) {
        let Some(row) = row.get_mut(..row_bytes) else {
            break;
        };
        for pixel in row
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .filter_map(|x| <&mut [u8; 3]>::try_from(x).ok())
        {
            func(pixel);
            visited += 1;
        }
    }
    visited
}
