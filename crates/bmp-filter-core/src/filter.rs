/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Average intensities at or above this become white
/// in threshold mode, everything below becomes black
pub const THRESHOLD_LEVEL: u8 = 128;

/// The two supported pixel filters
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterMode {
    /// Set every channel to the pixel's average intensity
    Grayscale,
    /// Set every channel to 255 or 0 depending on whether the
    /// average intensity reaches [`THRESHOLD_LEVEL`]
    Threshold
}

impl FilterMode {
    pub const fn get_name(&self) -> &'static str {
        match self {
            FilterMode::Grayscale => "Grayscale",
            FilterMode::Threshold => "Threshold"
        }
    }

    /// Filter one BGR pixel in place
    #[inline]
    pub fn apply(self, pixel: &mut [u8; 3]) {
        match self {
            FilterMode::Grayscale => grayscale_pixel(pixel),
            FilterMode::Threshold => threshold_pixel(pixel)
        }
    }
}

/// Truncated average of the three channels
///
/// The sum is at most 765 so the quotient always fits in a byte.
#[inline]
pub fn intensity(blue: u8, green: u8, red: u8) -> u8 {
    let sum = u16::from(blue) + u16::from(green) + u16::from(red);
    (sum / 3) as u8
}

#[inline]
pub fn grayscale_pixel(pixel: &mut [u8; 3]) {
    let [b, g, r] = *pixel;
    *pixel = [intensity(b, g, r); 3];
}

#[inline]
pub fn threshold_pixel(pixel: &mut [u8; 3]) {
    let [b, g, r] = *pixel;
    let value = if intensity(b, g, r) >= THRESHOLD_LEVEL {
        u8::MAX
    } else {
        u8::MIN
    };
    *pixel = [value; 3];
}
