//! ppm_filter
//!
//! Spatial filters for plain-text P3 images: grayscale, invert, emboss and
//! motion blur, with a command line driver and optional Python and WASM
//! bindings.
//!
//! ## Image Model
//! An [`image::Image`] is a fixed-size grid of [`color::Color`] values with
//! signed integer channels, addressed by `(x, y)`. Filters mutate it in
//! place and clamp their output to 0-255.
//!
//! ## Pipeline
//! `ppm::read_file` → `filters::Filter::apply` → `ppm::write_file`. See
//! [`cli::run`].

pub mod cli;
pub mod color;
pub mod errors;
pub mod filters;
pub mod image;
pub mod ppm;

#[cfg(feature = "wasm")]
pub mod wasm;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::errors::PpmFilterError;
    use crate::filters::Filter;
    use crate::image::Image;

    impl From<PpmFilterError> for PyErr {
        fn from(e: PpmFilterError) -> PyErr {
            PyValueError::new_err(e.to_string())
        }
    }

    fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, i32>,
        filter: Filter,
    ) -> PyResult<Bound<'py, PyArray3<i32>>> {
        let mut img = Image::from_rgb_array(image.as_array())?;
        filter.apply(&mut img);
        Ok(img.to_rgb_array().into_pyarray(py))
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Convert an (H, W, 3) int32 image to grayscale (channel mean).
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, i32>,
    ) -> PyResult<Bound<'py, PyArray3<i32>>> {
        apply_filter(py, image, Filter::Grayscale)
    }

    /// Invert an (H, W, 3) int32 image.
    #[pyfunction]
    pub fn invert<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, i32>,
    ) -> PyResult<Bound<'py, PyArray3<i32>>> {
        apply_filter(py, image, Filter::Invert)
    }

    /// Emboss an (H, W, 3) int32 image against each pixel's up-left neighbor.
    #[pyfunction]
    pub fn emboss<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, i32>,
    ) -> PyResult<Bound<'py, PyArray3<i32>>> {
        apply_filter(py, image, Filter::Emboss)
    }

    /// Horizontal motion blur over a window of `length` pixels.
    #[pyfunction]
    pub fn motion_blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, i32>,
        length: usize,
    ) -> PyResult<Bound<'py, PyArray3<i32>>> {
        apply_filter(py, image, Filter::MotionBlur { length })
    }

    #[pymodule]
    pub fn ppm_filter(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(invert, m)?)?;
        m.add_function(wrap_pyfunction!(emboss, m)?)?;
        m.add_function(wrap_pyfunction!(motion_blur, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::ppm_filter;
