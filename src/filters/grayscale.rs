//! Grayscale conversion filter.
//!
//! Uses the unweighted channel mean, floored and clamped to [0, 255].

use crate::color::Color;
use crate::image::Image;

use super::core::{clamp_channel, floor_div, map_pixels};

/// Gray level of a single pixel: floor of the channel mean, clamped.
#[inline]
pub fn gray_level(c: Color) -> i32 {
    let sum = c.red as i64 + c.green as i64 + c.blue as i64;
    clamp_channel(floor_div(sum, 3))
}

/// Convert the image to grayscale in place.
///
/// Every pixel becomes R=G=B=`gray_level(pixel)`.
pub fn grayscale(image: &mut Image) {
    map_pixels(image, |c| Color::gray(gray_level(c)));
}
