/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use bmp_filter_core::{apply_filter, FilterMode, FilterOptions, RowStride};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // both strides must stay inside the buffer whatever the header claims
    let mut padded = data.to_vec();
    let _ = apply_filter(&mut padded, FilterMode::Threshold, FilterOptions::default());

    let mut packed = data.to_vec();
    let options = FilterOptions::default().set_row_stride(RowStride::Packed);
    let _ = apply_filter(&mut packed, FilterMode::Grayscale, options);
});
