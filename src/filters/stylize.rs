//! Stylize filters: Emboss.
//!
//! ## Emboss
//!
//! Each pixel is compared with its up-left neighbor (x-1, y-1). The signed
//! difference of the first channel (red, green, blue order) whose absolute
//! difference strictly exceeds the running maximum becomes `diff`, and the
//! pixel turns gray at `128 + diff`. Pixels on the top row or left column
//! have no neighbor and become mid gray.
//!
//! Neighbors are read from the pre-filter image.

use ndarray::Array2;

use crate::color::Color;
use crate::image::Image;

use super::core::{clamp_channel, map_pixels_from_snapshot};

/// Gray level the emboss filter centers its output on.
pub const EMBOSS_MID_GRAY: i64 = 128;

/// Signed emboss difference between a pixel and its up-left neighbor.
///
/// Channels are checked red, green, blue; a later channel only wins if its
/// absolute difference is strictly larger, so ties keep the earlier one.
///
/// Differences are taken in `i64`, so extreme channel values cannot
/// overflow.
#[inline]
pub fn emboss_diff(current: Color, up_left: Color) -> i64 {
    let mut diff = 0i64;
    for (cur, prev) in current.channels().into_iter().zip(up_left.channels()) {
        let d = cur as i64 - prev as i64;
        if d.abs() > diff.abs() {
            diff = d;
        }
    }
    diff
}

fn emboss_pixel(source: &Array2<Color>, x: usize, y: usize) -> Color {
    let diff = if x > 0 && y > 0 {
        emboss_diff(source[[y, x]], source[[y - 1, x - 1]])
    } else {
        0
    };
    Color::gray(clamp_channel(EMBOSS_MID_GRAY + diff))
}

/// Apply the emboss effect in place.
pub fn emboss(image: &mut Image) {
    map_pixels_from_snapshot(image, emboss_pixel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emboss_black_2x2() {
        let mut img = Image::new(2, 2).unwrap();

        emboss(&mut img);

        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(img.get(x, y).unwrap(), Color::gray(128));
            }
        }
    }

    #[test]
    fn test_emboss_uniform_image() {
        let mut img = Image::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                img.set(x, y, Color::new(12, 200, 77)).unwrap();
            }
        }

        emboss(&mut img);

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(img.get(x, y).unwrap(), Color::gray(128));
            }
        }
    }

    #[test]
    fn test_emboss_corner_is_mid_gray() {
        let mut img = Image::new(2, 2).unwrap();
        img.set(0, 0, Color::new(250, 3, 99)).unwrap();

        emboss(&mut img);

        assert_eq!(img.get(0, 0).unwrap(), Color::gray(128));
    }

    #[test]
    fn test_emboss_diff_picks_largest_channel() {
        // r: +10, g: -10 (tie, ignored), b: +100
        let d = emboss_diff(Color::new(100, 50, 200), Color::new(90, 60, 100));
        assert_eq!(d, 100);
    }

    #[test]
    fn test_emboss_diff_tie_keeps_earlier_channel() {
        // r: +10, g: -10; the green tie must not flip the sign
        let d = emboss_diff(Color::new(10, 0, 0), Color::new(0, 10, 0));
        assert_eq!(d, 10);
    }

    #[test]
    fn test_emboss_diff_extreme_channels() {
        let d = emboss_diff(Color::new(i32::MIN, 0, 0), Color::new(i32::MAX, 0, 0));
        assert_eq!(d, i32::MIN as i64 - i32::MAX as i64);
    }

    #[test]
    fn test_emboss_large_decoded_channel() {
        let mut img =
            crate::ppm::decode("P3 2 2 255 0 0 0 0 0 0 0 0 0 2147483647 0 0").unwrap();

        emboss(&mut img);

        assert_eq!(img.get(1, 1).unwrap(), Color::gray(255));
        assert_eq!(img.get(0, 0).unwrap(), Color::gray(128));
    }

    #[test]
    fn test_emboss_extreme_negative_clamps_to_black() {
        let mut img = Image::new(2, 2).unwrap();
        img.set(0, 0, Color::new(i32::MAX, 0, 0)).unwrap();
        img.set(1, 1, Color::new(i32::MIN, 0, 0)).unwrap();

        emboss(&mut img);

        assert_eq!(img.get(1, 1).unwrap(), Color::gray(0));
    }

    #[test]
    fn test_emboss_clamps() {
        let mut img = Image::new(2, 2).unwrap();
        img.set(0, 0, Color::new(200, 0, 0)).unwrap();
        img.set(1, 1, Color::BLACK).unwrap();

        emboss(&mut img);

        // 128 - 200 clamps to 0
        assert_eq!(img.get(1, 1).unwrap(), Color::gray(0));
    }

    #[test]
    fn test_emboss_reads_original_neighbors() {
        let mut img = Image::new(3, 3).unwrap();
        img.set(1, 1, Color::gray(100)).unwrap();
        img.set(2, 2, Color::gray(50)).unwrap();

        emboss(&mut img);

        assert_eq!(img.get(1, 1).unwrap(), Color::gray(228));
        // Compared with the original 100, not the embossed 228
        assert_eq!(img.get(2, 2).unwrap(), Color::gray(78));
        assert_eq!(img.get(2, 1).unwrap(), Color::gray(128));
        assert_eq!(img.get(1, 2).unwrap(), Color::gray(128));
        assert_eq!(img.get(2, 0).unwrap(), Color::gray(128));
    }
}
