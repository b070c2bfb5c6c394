/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Filter options
//!
//! A single `Copy` struct shared by the header interpreter
//! and the pixel walker.

/// How far the walker moves between the start of one
/// row and the start of the next
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RowStride {
    /// Advance by `width * 3` plus padding to the next
    /// multiple of four bytes, as bitmaps are laid out.
    Padded,
    /// Advance by `width * 3` only.
    ///
    /// The row advance of the legacy C filter, which computed the
    /// padding but never applied it. For widths where `width * 3`
    /// is not a multiple of 4 every row after the first starts at the
    /// wrong offset.
    Packed
}

/// Options respected by [`apply_filter`](crate::apply_filter)
#[derive(Debug, Copy, Clone)]
pub struct FilterOptions {
    strict_mode:       bool,
    row_stride:        RowStride,
    honor_data_offset: bool
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            strict_mode:       false,
            row_stride:        RowStride::Padded,
            honor_data_offset: false
        }
    }
}

impl FilterOptions {
    /// Options walking rows the way the legacy tool did
    ///
    /// - Lenient header parsing
    /// - Packed row stride
    /// - Pixel array fixed at byte 54
    ///
    /// Output matches the legacy tool for bottom-up bitmaps. A negative
    /// height is still walked as `|height|` top-down rows, where the
    /// legacy loop visited none.
    pub fn new_legacy() -> FilterOptions {
        FilterOptions::default().set_row_stride(RowStride::Packed)
    }

    /// Return true if malformed headers should be rejected
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    pub const fn get_row_stride(&self) -> RowStride {
        self.row_stride
    }

    /// Return true if the pixel array should be located using
    /// the offset stored at byte 10 of the file header
    pub const fn get_honor_data_offset(&self) -> bool {
        self.honor_data_offset
    }

    /// Set whether header plausibility failures are errors
    ///
    /// When set to false, failures are logged via the log crate
    /// and the header is used anyway.
    ///
    /// When set to true, parsing returns
    /// [`BmpFilterErrors::MalformedHeader`](crate::BmpFilterErrors::MalformedHeader).
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Set how the walker advances between rows
    pub fn set_row_stride(mut self, stride: RowStride) -> Self {
        self.row_stride = stride;
        self
    }

    /// Set whether the pixel array starts at the header's data
    /// offset instead of the fixed byte 54
    pub fn set_honor_data_offset(mut self, yes: bool) -> Self {
        self.honor_data_offset = yes;
        self
    }
}
