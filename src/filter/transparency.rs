//! Near-white pixel detection and replacement

use crate::io::configuration::TRANSPARENT_WHITE;
use image::{Rgba, RgbaImage};

/// Check whether every color channel of `pixel` is strictly above `threshold`
///
/// Alpha is ignored, so an already transparent white pixel still matches.
#[inline]
pub const fn is_near_white(pixel: Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r > threshold && g > threshold && b > threshold
}

/// Replace every near-white pixel with transparent white, in place
///
/// Other pixels keep all four channels. Dimensions never change.
/// Returns the number of pixels rewritten.
pub fn make_transparent(image: &mut RgbaImage, threshold: u8) -> usize {
    let mut rewritten = 0;
    for pixel in image.pixels_mut() {
        if is_near_white(*pixel, threshold) {
            *pixel = Rgba(TRANSPARENT_WHITE);
            rewritten += 1;
        }
    }
    rewritten
}
