/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Cursor;

use bmp_filter_bin::{exec_workflow, parse_cmd_args, CmdOptions, FilterAppErrors, ReadMode};
use bmp_filter_core::{intensity, FilterMode, THRESHOLD_LEVEL};
use nanorand::Rng;

use crate::build_bmp;

fn random_rows(rng: &mut nanorand::WyRand, width: usize, height: usize) -> Vec<Vec<[u8; 3]>> {
    (0..height)
        .map(|_| {
            (0..width)
                .map(|_| {
                    let mut pixel = [0_u8; 3];
                    rng.fill(&mut pixel);
                    pixel
                })
                .collect()
        })
        .collect()
}

fn run(input: &[u8], opts: &CmdOptions) -> Result<Vec<u8>, FilterAppErrors> {
    let mut output = Vec::new();
    exec_workflow(&mut Cursor::new(input.to_vec()), &mut output, opts)?;
    Ok(output)
}

fn options(args: &[&str]) -> CmdOptions {
    let mut full = vec!["bmp-filter"];
    full.extend_from_slice(args);
    parse_cmd_args(full).unwrap()
}

/// Pixels of the output, in stored order, padding skipped
fn output_pixels(output: &[u8], width: usize, height: usize) -> Vec<[u8; 3]> {
    let stride = width * 3 + bmp_filter_core::row_padding(width * 3);

    output[54..]
        .chunks(stride)
        .take(height)
        .flat_map(|row| row[..width * 3].chunks_exact(3))
        .map(|p| [p[0], p[1], p[2]])
        .collect()
}

#[test]
fn grayscale_channels_equal_average() {
    let mut rng = nanorand::WyRand::new_seed(42);

    for (width, height) in [(1, 1), (2, 3), (7, 5), (16, 4), (33, 9)] {
        let rows = random_rows(&mut rng, width, height);
        let input = build_bmp(width, &rows, false);

        let output = run(&input, &options(&["-g"])).unwrap();

        assert_eq!(output.len(), input.len());
        assert_eq!(&output[..54], &input[..54]);

        let original: Vec<[u8; 3]> = rows.iter().flatten().copied().collect();
        for (before, after) in original.iter().zip(output_pixels(&output, width, height)) {
            let avg = intensity(before[0], before[1], before[2]);
            assert_eq!(after, [avg; 3]);
        }
    }
}

#[test]
fn threshold_channels_are_black_or_white() {
    let mut rng = nanorand::WyRand::new_seed(7);

    for (width, height) in [(1, 2), (3, 3), (8, 8), (13, 2)] {
        let rows = random_rows(&mut rng, width, height);
        let input = build_bmp(width, &rows, false);

        let output = run(&input, &options(&[])).unwrap();
        assert_eq!(output.len(), input.len());

        let original: Vec<[u8; 3]> = rows.iter().flatten().copied().collect();
        for (before, after) in original.iter().zip(output_pixels(&output, width, height)) {
            let white = intensity(before[0], before[1], before[2]) >= THRESHOLD_LEVEL;
            assert_eq!(after, if white { [255; 3] } else { [0; 3] });
        }
    }
}

#[test]
fn filtering_twice_changes_nothing() {
    let mut rng = nanorand::WyRand::new_seed(3);
    let rows = random_rows(&mut rng, 11, 6);
    let input = build_bmp(11, &rows, false);

    for args in [&["-g"][..], &[][..]] {
        let opts = options(args);
        let once = run(&input, &opts).unwrap();
        let twice = run(&once, &opts).unwrap();

        assert_eq!(once, twice);
    }
}

#[test]
fn padded_stride_leaves_padding_alone() {
    let mut rng = nanorand::WyRand::new_seed(11);
    let rows = random_rows(&mut rng, 3, 4);
    let mut input = build_bmp(3, &rows, false);

    // mark the padding byte of every row
    for row in 0..4 {
        input[54 + row * 12 + 9..54 + row * 12 + 12].copy_from_slice(&[0xEE; 3]);
    }
    let output = run(&input, &options(&["-g"])).unwrap();

    for row in 0..4 {
        assert_eq!(&output[54 + row * 12 + 9..54 + row * 12 + 12], &[0xEE; 3]);
    }
}

#[test]
fn legacy_stride_matches_padded_when_aligned() {
    let mut rng = nanorand::WyRand::new_seed(5);
    let rows = random_rows(&mut rng, 4, 6);
    let input = build_bmp(4, &rows, false);

    let padded = run(&input, &options(&["-g"])).unwrap();
    let legacy = run(&input, &options(&["-g", "--legacy-stride"])).unwrap();

    assert_eq!(padded, legacy);
}

#[test]
fn strict_mode_rejects_foreign_files() {
    let rows = vec![vec![[1, 2, 3]; 2]; 2];
    let mut input = build_bmp(2, &rows, false);
    input[0..2].copy_from_slice(b"XX");

    // lenient by default, the pixels are still filtered
    let output = run(&input, &options(&["-g"])).unwrap();
    assert_eq!(&output[54..57], &[2, 2, 2]);

    let err = run(&input, &options(&["-g", "--strict"])).unwrap_err();
    assert!(matches!(err, FilterAppErrors::Bitmap(_)));
    assert_eq!(err.exit_code(), 6);
}

#[test]
fn honor_offset_skips_gap() {
    let rows = vec![vec![[90, 90, 90]]];
    let plain = build_bmp(1, &rows, false);

    // insert a 4 byte gap between the headers and the pixels
    let mut input = plain[..54].to_vec();
    input.extend_from_slice(&[200; 4]);
    input.extend_from_slice(&plain[54..]);
    input[10..14].copy_from_slice(&58_u32.to_le_bytes());

    let output = run(&input, &options(&["--honor-offset"])).unwrap();

    assert_eq!(&output[54..58], &[200; 4]);
    assert_eq!(&output[58..61], &[0; 3]);
}

#[test]
fn stream_mode_reads_whole_input() {
    let mut rng = nanorand::WyRand::new_seed(9);
    let rows = random_rows(&mut rng, 5, 5);
    let input = build_bmp(5, &rows, false);

    let opts = options(&["--stream"]);
    assert_eq!(opts.read_mode, ReadMode::Stream);

    assert_eq!(run(&input, &opts).unwrap(), run(&input, &options(&[])).unwrap());
}

#[test]
fn two_operands_is_usage_error() {
    let err = parse_cmd_args(["bmp-filter", "in.bmp", "out.bmp"]).unwrap_err();

    assert!(matches!(err, FilterAppErrors::Usage(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn header_lies_about_height() {
    let rows = vec![vec![[1, 2, 3]; 4]; 2];
    let mut input = build_bmp(4, &rows, false);
    input[22..26].copy_from_slice(&1000_i32.to_le_bytes());

    let opts = CmdOptions {
        mode: FilterMode::Threshold,
        ..CmdOptions::new()
    };
    let err = run(&input, &opts).unwrap_err();

    assert_eq!(err.exit_code(), 6);
}
