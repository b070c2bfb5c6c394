/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use bmp_filter_core::{row_padding, FilterMode, FilterOptions, RowStride};
use serde::Deserialize;

mod pipeline;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFilterMode {
    Grayscale,
    Threshold
}

impl JsonFilterMode {
    pub fn to_filter_mode(self) -> FilterMode {
        match self {
            Self::Grayscale => FilterMode::Grayscale,
            Self::Threshold => FilterMode::Threshold
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonRowStride {
    Padded,
    Packed
}

impl JsonRowStride {
    pub fn to_options(self) -> FilterOptions {
        match self {
            Self::Padded => FilterOptions::default().set_row_stride(RowStride::Padded),
            Self::Packed => FilterOptions::default().set_row_stride(RowStride::Packed)
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:     String,
    pub width:    usize,
    pub top_down: bool,
    pub rows:     Vec<Vec<[u8; 3]>>,
    pub mode:     JsonFilterMode,
    pub stride:   JsonRowStride,
    /// The pixel array, padding included, after filtering
    pub expected: Vec<u8>,
    pub comment:  Option<String>
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

/// A 24-bit `BITMAPINFOHEADER` bitmap with padded rows
pub fn build_bmp(width: usize, rows: &[Vec<[u8; 3]>], top_down: bool) -> Vec<u8> {
    let padding = row_padding(width * 3);
    let array_size = rows.len() * (width * 3 + padding);
    let height = if top_down {
        -(rows.len() as i32)
    } else {
        rows.len() as i32
    };

    let mut out = Vec::with_capacity(54 + array_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&((54 + array_size) as u32).to_le_bytes());
    out.extend_from_slice(&0_u32.to_le_bytes());
    out.extend_from_slice(&54_u32.to_le_bytes());
    out.extend_from_slice(&40_u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1_u16.to_le_bytes());
    out.extend_from_slice(&24_u16.to_le_bytes());
    out.extend_from_slice(&0_u32.to_le_bytes());
    out.extend_from_slice(&(array_size as u32).to_le_bytes());
    out.resize(54, 0);

    for row in rows {
        for pixel in row {
            out.extend_from_slice(pixel);
        }
        out.resize(out.len() + padding, 0);
    }
    out
}
