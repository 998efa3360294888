//! Fixed-size 2-D grid of [`Color`] values.
//!
//! Pixels are stored as an `Array2<Color>` of shape (height, width) so rows
//! are contiguous. Public access goes through `get`/`set` with `(x, y)`
//! coordinates; filters work on the whole grid through `pixels_mut`.

use ndarray::{Array2, Array3, ArrayView3};

use crate::color::Color;
use crate::errors::{PpmFilterError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Array2<Color>,
}

impl Image {
    /// Allocate a `width` x `height` image filled with black.
    ///
    /// # Errors
    /// `InvalidDimension` if either dimension is zero or the grid would not
    /// fit in memory addressable by an `isize`.
    pub fn new(width: usize, height: usize) -> Result<Image> {
        let bytes = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(std::mem::size_of::<Color>()));
        match bytes {
            Some(b) if width > 0 && height > 0 && b <= isize::MAX as usize => {}
            _ => return Err(PpmFilterError::InvalidDimension { width, height }),
        }
        Ok(Image { pixels: Array2::from_elem((height, width), Color::BLACK) })
    }

    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Color at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Color> {
        self.pixels
            .get((y, x))
            .copied()
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Replace the color at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let err = self.out_of_bounds(x, y);
        let px = self.pixels.get_mut((y, x)).ok_or(err)?;
        *px = color;
        Ok(())
    }

    pub(crate) fn pixels(&self) -> &Array2<Color> {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut Array2<Color> {
        &mut self.pixels
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> PpmFilterError {
        PpmFilterError::OutOfBounds { x, y, width: self.width(), height: self.height() }
    }

    // ========================================================================
    // Array Conversion
    // ========================================================================

    /// Build an image from a (height, width, 3) channel array.
    ///
    /// # Errors
    /// `InvalidDimension` for an empty grid or a channel count other than 3.
    pub fn from_rgb_array(input: ArrayView3<i32>) -> Result<Image> {
        let (height, width, channels) = input.dim();
        if channels != 3 {
            return Err(PpmFilterError::InvalidDimension { width, height });
        }
        let mut image = Image::new(width, height)?;
        for ((y, x), px) in image.pixels.indexed_iter_mut() {
            *px = Color::new(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
        }
        Ok(image)
    }

    /// Copy the image into a (height, width, 3) channel array.
    pub fn to_rgb_array(&self) -> Array3<i32> {
        let (height, width) = self.pixels.dim();
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| self.pixels[[y, x]].channels()[c])
    }
}
