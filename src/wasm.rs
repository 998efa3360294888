//! WebAssembly exports for ppm_filter.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! Pixel buffers are flat row-major `i32` RGB triples
//! (length = width * height * 3).

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::filters::Filter;
use crate::image::Image;
use crate::ppm;

fn apply_filter(data: &[i32], width: usize, height: usize, filter: Filter) -> Result<Vec<i32>, JsError> {
    let input = Array3::from_shape_vec((height, width, 3), data.to_vec())?;
    let mut image = Image::from_rgb_array(input.view())?;
    filter.apply(&mut image);
    Ok(image.to_rgb_array().into_raw_vec_and_offset().0)
}

// ============================================================================
// Filters
// ============================================================================

/// Convert an RGB buffer to grayscale.
#[wasm_bindgen]
pub fn grayscale_wasm(data: &[i32], width: usize, height: usize) -> Result<Vec<i32>, JsError> {
    apply_filter(data, width, height, Filter::Grayscale)
}

/// Invert an RGB buffer.
#[wasm_bindgen]
pub fn invert_wasm(data: &[i32], width: usize, height: usize) -> Result<Vec<i32>, JsError> {
    apply_filter(data, width, height, Filter::Invert)
}

/// Emboss an RGB buffer.
#[wasm_bindgen]
pub fn emboss_wasm(data: &[i32], width: usize, height: usize) -> Result<Vec<i32>, JsError> {
    apply_filter(data, width, height, Filter::Emboss)
}

/// Motion blur an RGB buffer over `length` pixels.
#[wasm_bindgen]
pub fn motion_blur_wasm(
    data: &[i32],
    width: usize,
    height: usize,
    length: usize,
) -> Result<Vec<i32>, JsError> {
    apply_filter(data, width, height, Filter::MotionBlur { length })
}

// ============================================================================
// P3 Text
// ============================================================================

/// Decode P3 text, apply the named filter and return the encoded result.
///
/// # Arguments
/// * `text` - P3 image text
/// * `filter` - Filter name as accepted by the command line
/// * `blur_length` - Blur length, required for `motionblur` only
#[wasm_bindgen]
pub fn filter_ppm_wasm(text: &str, filter: &str, blur_length: Option<String>) -> Result<String, JsError> {
    let params: Vec<String> = blur_length.into_iter().collect();
    let filter = Filter::parse(filter, params.as_slice())?;
    let mut image = ppm::decode(text)?;
    filter.apply(&mut image);
    Ok(ppm::encode(&image))
}
