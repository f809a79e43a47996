//! WebAssembly exports for the offset filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and operate on
//! flat row-major buffers.
//!
//! ## Bit Depth Support
//!
//! All filters have two versions:
//! - **u8**: 8-bit per channel (0-255), standard for web/display
//! - **f32**: Float per channel (0.0-1.0), for HDR/linear workflows

use ndarray::{Array2, Array3};
use wasm_bindgen::prelude::*;

use crate::config::{clamp_offset, WrapMode};
use crate::filters::color::FillColor;
use crate::filters::mask::{invert_mask_f32, invert_mask_u8};
use crate::filters::offset::{offset_f32, offset_mask_f32, offset_mask_u8, offset_u8};

// ============================================================================
// Image Offset
// ============================================================================

/// Offset a u8 image.
///
/// # Arguments
/// * `data` - Flat array of bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Channels per pixel (1, 3, or 4)
/// * `offset_x` / `offset_y` - Offsets, clamped to -4096..=4096
/// * `wrap` - Wrap content around edges instead of filling
/// * `fill_color` - "r,g,b", "r,g,b,a" or hex; malformed values become opaque black
///
/// # Returns
/// Flat array of bytes with the offset image
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn offset_image_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    offset_x: i32,
    offset_y: i32,
    wrap: bool,
    fill_color: &str,
) -> Result<Vec<u8>, JsError> {
    let input = Array3::from_shape_vec((height, width, channels), data.to_vec())?;
    let fill = FillColor::parse_or_default(fill_color);

    let result = offset_u8(
        input.view(),
        clamp_offset(offset_x),
        clamp_offset(offset_y),
        WrapMode::from(wrap),
        &fill,
    );
    Ok(result.into_raw_vec_and_offset().0)
}

/// Offset an f32 image (values 0.0-1.0).
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn offset_image_f32_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    offset_x: i32,
    offset_y: i32,
    wrap: bool,
    fill_color: &str,
) -> Result<Vec<f32>, JsError> {
    let input = Array3::from_shape_vec((height, width, channels), data.to_vec())?;
    let fill = FillColor::parse_or_default(fill_color);

    let result = offset_f32(
        input.view(),
        clamp_offset(offset_x),
        clamp_offset(offset_y),
        WrapMode::from(wrap),
        &fill,
    );
    Ok(result.into_raw_vec_and_offset().0)
}

// ============================================================================
// Mask Offset
// ============================================================================

/// Offset a u8 mask (length = width * height). Exposed regions become 0.
#[wasm_bindgen]
pub fn offset_mask_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    offset_x: i32,
    offset_y: i32,
    wrap: bool,
    invert: bool,
) -> Result<Vec<u8>, JsError> {
    let input = Array2::from_shape_vec((height, width), data.to_vec())?;
    let shifted = offset_mask_u8(
        input.view(),
        clamp_offset(offset_x),
        clamp_offset(offset_y),
        WrapMode::from(wrap),
    );
    let result = if invert { invert_mask_u8(shifted.view()) } else { shifted };
    Ok(result.into_raw_vec_and_offset().0)
}

/// Offset an f32 mask (values 0.0-1.0). Exposed regions become 0.0.
#[wasm_bindgen]
pub fn offset_mask_f32_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    offset_x: i32,
    offset_y: i32,
    wrap: bool,
    invert: bool,
) -> Result<Vec<f32>, JsError> {
    let input = Array2::from_shape_vec((height, width), data.to_vec())?;
    let shifted = offset_mask_f32(
        input.view(),
        clamp_offset(offset_x),
        clamp_offset(offset_y),
        WrapMode::from(wrap),
    );
    let result = if invert { invert_mask_f32(shifted.view()) } else { shifted };
    Ok(result.into_raw_vec_and_offset().0)
}
