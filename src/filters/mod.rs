//! Filter modules for image processing effects.
//!
//! All filters mutate an [`Image`] in place and work on integer RGB pixels.
//!
//! ## Filter Categories
//!
//! - **Pixel-wise**: grayscale, invert (every pixel independent)
//! - **Stylize**: emboss (reads the up-left neighbor)
//! - **Blur**: motion blur (reads a window to the right)
//!
//! Neighborhood filters read from a snapshot of the input, so every filter
//! can run its pixels in parallel with rayon.

use std::fmt;

use crate::errors::{usage_error, Result};
use crate::image::Image;

pub mod blur;
pub mod color_adjust;
pub mod core;
pub mod grayscale;
pub mod stylize;

pub use blur::motion_blur;
pub use color_adjust::invert;
pub use grayscale::grayscale;
pub use stylize::emboss;

/// One of the supported filters with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Grayscale,
    Invert,
    Emboss,
    MotionBlur { length: usize },
}

impl Filter {
    /// Resolve a filter name and its extra command line parameters.
    ///
    /// `greyscale` is accepted as an alias of `grayscale`. `motionblur`
    /// takes exactly one non-negative integer length; the other filters
    /// take no parameters.
    ///
    /// # Errors
    /// `UsageError` for an unknown name, a wrong parameter count or an
    /// invalid blur length.
    pub fn parse<S: AsRef<str>>(name: &str, params: &[S]) -> Result<Filter> {
        let filter = match name {
            "grayscale" | "greyscale" => Filter::Grayscale,
            "invert" => Filter::Invert,
            "emboss" => Filter::Emboss,
            "motionblur" => {
                let [length] = params else {
                    return Err(usage_error("motionblur takes exactly one blur length"));
                };
                let length = length.as_ref();
                let length = length
                    .parse::<usize>()
                    .map_err(|_| usage_error(format!("invalid blur length '{length}'")))?;
                return Ok(Filter::MotionBlur { length });
            }
            _ => return Err(usage_error(format!("unknown filter '{name}'"))),
        };

        if !params.is_empty() {
            return Err(usage_error(format!("{filter} takes no parameters")));
        }
        Ok(filter)
    }

    /// Canonical name of the filter.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Invert => "invert",
            Filter::Emboss => "emboss",
            Filter::MotionBlur { .. } => "motionblur",
        }
    }

    /// Apply the filter to `image` in place.
    pub fn apply(&self, image: &mut Image) {
        match *self {
            Filter::Grayscale => grayscale(image),
            Filter::Invert => invert(image),
            Filter::Emboss => emboss(image),
            Filter::MotionBlur { length } => motion_blur(image, length),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::MotionBlur { length } => write!(f, "{}({length})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}
