//! Pixel-wise color adjustments.

use crate::color::Color;
use crate::image::Image;

use super::core::{map_pixels, CHANNEL_MAX};

/// Invert image colors in place.
///
/// Each channel becomes `255 - channel`. Input is assumed to be in range,
/// so nothing is clamped and inverting twice restores the image. Channels
/// whose inverse does not fit in `i32` saturate.
pub fn invert(image: &mut Image) {
    map_pixels(image, |c| {
        Color::new(invert_channel(c.red), invert_channel(c.green), invert_channel(c.blue))
    });
}

#[inline]
fn invert_channel(v: i32) -> i32 {
    CHANNEL_MAX.saturating_sub(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_two_pixels() {
        let mut img = Image::new(2, 1).unwrap();
        img.set(0, 0, Color::new(10, 20, 30)).unwrap();
        img.set(1, 0, Color::new(40, 50, 60)).unwrap();

        invert(&mut img);

        assert_eq!(img.get(0, 0).unwrap(), Color::new(245, 235, 225));
        assert_eq!(img.get(1, 0).unwrap(), Color::new(215, 205, 195));
    }

    #[test]
    fn test_invert_extreme_channels() {
        let mut img = Image::new(1, 1).unwrap();
        img.set(0, 0, Color::new(i32::MIN, i32::MAX, 300)).unwrap();

        invert(&mut img);

        assert_eq!(img.get(0, 0).unwrap(), Color::new(i32::MAX, 255 - i32::MAX, -45));
    }

    #[test]
    fn test_invert_twice_restores() {
        let mut img = Image::new(3, 2).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                let v = (x * 40 + y * 90) as i32;
                img.set(x, y, Color::new(v, 255 - v, v / 2)).unwrap();
            }
        }
        let original = img.clone();

        invert(&mut img);
        assert_ne!(img, original);
        invert(&mut img);

        assert_eq!(img, original);
    }
}
