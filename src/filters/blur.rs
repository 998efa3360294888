//! Blur filters.
//!
//! Provides a horizontal motion blur that smears each pixel toward the
//! right edge of its row.

use ndarray::{s, ArrayView1, ArrayViewMut1, Axis};
use rayon::prelude::*;

use crate::color::Color;
use crate::image::Image;

use super::core::floor_div;

/// Apply motion blur in place.
///
/// Each pixel becomes the floored mean of itself and up to `length - 1`
/// pixels to its right, stopping at the row end. The rightmost pixel of a
/// row is therefore never changed. A `length` of 0 or 1 leaves the image
/// untouched.
///
/// # Arguments
/// * `image` - Image to blur
/// * `length` - Window length in pixels, including the pixel itself
pub fn motion_blur(image: &mut Image, length: usize) {
    if length < 1 {
        return;
    }

    let source = image.pixels().to_owned();
    image
        .pixels_mut()
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(source.axis_iter(Axis(0)).into_par_iter())
        .for_each(|(row, src)| blur_row(src, row, length));
}

fn blur_row(src: ArrayView1<Color>, mut dst: ArrayViewMut1<Color>, length: usize) {
    let width = src.len();

    for x in 0..width {
        let max_x = (width - 1).min(x.saturating_add(length - 1));

        let mut sum = [0i64; 3];
        for c in src.slice(s![x..=max_x]).iter() {
            sum[0] += c.red as i64;
            sum[1] += c.green as i64;
            sum[2] += c.blue as i64;
        }

        let count = (max_x - x + 1) as i64;
        // the mean of i32 values always fits in i32
        dst[x] = Color::new(
            floor_div(sum[0], count) as i32,
            floor_div(sum[1], count) as i32,
            floor_div(sum[2], count) as i32,
        );
    }
}
