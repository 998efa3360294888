//! Core utilities shared by the filters.
//!
//! - Channel clamping
//! - Parallel per-pixel mapping
//! - Snapshot-based neighborhood mapping

use ndarray::{Array2, Zip};

use crate::color::Color;
use crate::image::Image;

/// Lowest valid channel value.
pub const CHANNEL_MIN: i32 = 0;
/// Highest valid channel value.
pub const CHANNEL_MAX: i32 = 255;

/// Clamp a widened channel value to [0, 255].
///
/// Takes `i64` so intermediate sums and differences of `i32` channels
/// cannot overflow before clamping.
#[inline]
pub fn clamp_channel(v: i64) -> i32 {
    v.clamp(CHANNEL_MIN as i64, CHANNEL_MAX as i64) as i32
}

/// Floor of `sum / count` for a positive `count`.
///
/// Matches `floor` of the real quotient for negative sums too, unlike `/`.
#[inline]
pub fn floor_div(sum: i64, count: i64) -> i64 {
    sum.div_euclid(count)
}

/// Replace every pixel with `f(pixel)`.
///
/// For pixel-independent filters. Runs in parallel over the grid.
pub fn map_pixels<F>(image: &mut Image, f: F)
where
    F: Fn(Color) -> Color + Sync + Send,
{
    image.pixels_mut().par_mapv_inplace(f);
}

/// Replace every pixel with `f(source, x, y)`.
///
/// `source` is a copy of the grid taken before any pixel is written, indexed
/// `[[y, x]]`. Neighborhood filters read only from it, so the result does not
/// depend on the order pixels are visited.
pub fn map_pixels_from_snapshot<F>(image: &mut Image, f: F)
where
    F: Fn(&Array2<Color>, usize, usize) -> Color + Sync + Send,
{
    let source = image.pixels().to_owned();
    Zip::indexed(image.pixels_mut()).par_for_each(|(y, x), px| {
        *px = f(&source, x, y);
    });
}
