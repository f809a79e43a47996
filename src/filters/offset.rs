//! Offset (translate) filter with wrap-around or solid fill.
//!
//! Every output pixel `(x, y)` is sourced from input pixel `(x - dx, y - dy)`:
//! - **Wrap on**: the source position is taken modulo the canvas size, so
//!   content leaving one edge re-enters on the opposite edge (tiling).
//! - **Wrap off**: source positions outside the canvas produce the fill value.
//!
//! Sampling is exact integer indexing; no interpolation. A zero offset
//! returns an exact copy of the input.
//!
//! Images use the fill color converted to their channel layout (see
//! [`FillColor::to_pixel_f32`]). Masks always fill exposed regions with 0.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3};

use super::color::FillColor;
use crate::config::WrapMode;

/// Map an output coordinate to its source coordinate along one axis.
///
/// Returns `None` when the source lies outside `0..len` and wrap is off.
#[inline]
fn source_index(pos: usize, offset: i64, len: usize, wrap: WrapMode) -> Option<usize> {
    let src = pos as i64 - offset;
    if wrap.is_on() {
        Some(src.rem_euclid(len as i64) as usize)
    } else if src >= 0 && src < len as i64 {
        Some(src as usize)
    } else {
        None
    }
}

/// Precompute the source index of every output position along one axis.
fn source_table(offset: i32, len: usize, wrap: WrapMode) -> Vec<Option<usize>> {
    (0..len)
        .map(|pos| source_index(pos, offset as i64, len, wrap))
        .collect()
}

// ============================================================================
// Generic Implementation
// ============================================================================

/// Offset a single 2D plane.
///
/// # Arguments
/// * `input` - Plane of shape (height, width)
/// * `dx` - Horizontal offset (positive = right)
/// * `dy` - Vertical offset (positive = down)
/// * `wrap` - Wrap content around edges instead of filling
/// * `fill` - Value for exposed pixels when wrap is off
///
/// # Returns
/// New plane with the same shape as the input
pub fn offset_plane<T: Copy>(
    input: ArrayView2<T>,
    dx: i32,
    dy: i32,
    wrap: WrapMode,
    fill: T,
) -> Array2<T> {
    let (height, width) = input.dim();

    if (dx == 0 && dy == 0) || height == 0 || width == 0 {
        return input.to_owned();
    }

    let src_x = source_table(dx, width, wrap);
    let src_y = source_table(dy, height, wrap);

    Array2::from_shape_fn((height, width), |(y, x)| match (src_y[y], src_x[x]) {
        (Some(sy), Some(sx)) => input[[sy, sx]],
        _ => fill,
    })
}

/// Offset a multi-channel image.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels)
/// * `dx` - Horizontal offset (positive = right)
/// * `dy` - Vertical offset (positive = down)
/// * `wrap` - Wrap content around edges instead of filling
/// * `fill_pixel` - One fill value per channel, used when wrap is off
///
/// # Returns
/// New image with the same shape as the input
pub fn offset_channels<T: Copy + Default>(
    input: ArrayView3<T>,
    dx: i32,
    dy: i32,
    wrap: WrapMode,
    fill_pixel: &[T],
) -> Array3<T> {
    let (height, width, channels) = input.dim();

    if (dx == 0 && dy == 0) || height == 0 || width == 0 {
        return input.to_owned();
    }

    let src_x = source_table(dx, width, wrap);
    let src_y = source_table(dy, height, wrap);

    Array3::from_shape_fn((height, width, channels), |(y, x, c)| {
        match (src_y[y], src_x[x]) {
            (Some(sy), Some(sx)) => input[[sy, sx, c]],
            _ => fill_pixel.get(c).copied().unwrap_or_default(),
        }
    })
}

// ============================================================================
// Image Variants
// ============================================================================

/// Offset an f32 image (0.0-1.0) with 1, 3, or 4 channels.
///
/// Exposed pixels get `fill` converted to the image's channel layout; its
/// alpha is only used when the image itself carries an alpha channel.
pub fn offset_f32(
    input: ArrayView3<f32>,
    dx: i32,
    dy: i32,
    wrap: WrapMode,
    fill: &FillColor,
) -> Array3<f32> {
    let fill_pixel = fill.to_pixel_f32(input.dim().2);
    offset_channels(input, dx, dy, wrap, &fill_pixel)
}

/// Offset a u8 image (0-255) with 1, 3, or 4 channels.
pub fn offset_u8(
    input: ArrayView3<u8>,
    dx: i32,
    dy: i32,
    wrap: WrapMode,
    fill: &FillColor,
) -> Array3<u8> {
    let fill_pixel = fill.to_pixel_u8(input.dim().2);
    offset_channels(input, dx, dy, wrap, &fill_pixel)
}

// ============================================================================
// Mask Variants
// ============================================================================

/// Offset an f32 mask. Exposed regions become 0.0.
pub fn offset_mask_f32(input: ArrayView2<f32>, dx: i32, dy: i32, wrap: WrapMode) -> Array2<f32> {
    offset_plane(input, dx, dy, wrap, 0.0)
}

/// Offset a u8 mask. Exposed regions become 0.
pub fn offset_mask_u8(input: ArrayView2<u8>, dx: i32, dy: i32, wrap: WrapMode) -> Array2<u8> {
    offset_plane(input, dx, dy, wrap, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    /// Image where every sample is unique: value = (y * w + x) * c + ch
    fn ramp_u8(h: usize, w: usize, c: usize) -> Array3<u8> {
        Array3::from_shape_fn((h, w, c), |(y, x, ch)| ((y * w + x) * c + ch) as u8)
    }

    fn ramp_f32(h: usize, w: usize, c: usize) -> Array3<f32> {
        ramp_u8(h, w, c).mapv(|v| v as f32 / 255.0)
    }

    // ========================================================================
    // Identity
    // ========================================================================

    #[test]
    fn test_zero_offset_is_identity() {
        let img = ramp_f32(5, 7, 3);
        let fill = FillColor::rgb(255, 0, 0);
        for wrap in [WrapMode::Off, WrapMode::On] {
            assert_eq!(offset_f32(img.view(), 0, 0, wrap, &fill), img);
        }

        let mask = Array2::from_shape_fn((5, 7), |(y, x)| (y * 7 + x) as f32 / 35.0);
        assert_eq!(offset_mask_f32(mask.view(), 0, 0, WrapMode::Off), mask);
    }

    // ========================================================================
    // Wrap
    // ========================================================================

    #[test]
    fn test_wrap_moves_pixels_circularly() {
        let img = ramp_u8(3, 4, 1);
        let result = offset_u8(img.view(), 1, 0, WrapMode::On, &FillColor::DEFAULT);

        for y in 0..3 {
            assert_eq!(result[[y, 0, 0]], img[[y, 3, 0]]);
            for x in 1..4 {
                assert_eq!(result[[y, x, 0]], img[[y, x - 1, 0]]);
            }
        }
    }

    #[test]
    fn test_wrap_negative_and_large_offsets() {
        let img = ramp_u8(4, 5, 3);
        // -1 and W - 1 describe the same circular shift
        let a = offset_u8(img.view(), -1, -6, WrapMode::On, &FillColor::DEFAULT);
        let b = offset_u8(img.view(), 4, 2, WrapMode::On, &FillColor::DEFAULT);
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrap_round_trip() {
        let img = ramp_f32(6, 9, 4);
        for (dx, dy) in [(1, 0), (0, 1), (-3, 2), (17, -40), (4096, -4096)] {
            let shifted = offset_f32(img.view(), dx, dy, WrapMode::On, &FillColor::DEFAULT);
            let back = offset_f32(shifted.view(), -dx, -dy, WrapMode::On, &FillColor::DEFAULT);
            assert_eq!(back, img, "round trip failed for ({dx}, {dy})");
        }
    }

    // ========================================================================
    // Fill
    // ========================================================================

    #[test]
    fn test_fill_exposed_region() {
        let img = Array3::<u8>::from_elem((4, 4, 3), 100);
        let fill = FillColor::rgba(10, 20, 30, 40);
        let result = offset_u8(img.view(), 2, -1, WrapMode::Off, &fill);

        for y in 0..4 {
            for x in 0..4 {
                let exposed = x < 2 || y == 3;
                let expected = if exposed { [10, 20, 30] } else { [100, 100, 100] };
                for c in 0..3 {
                    assert_eq!(result[[y, x, c]], expected[c], "pixel ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_fill_alpha_only_with_alpha_channel() {
        let img = Array3::<f32>::ones((2, 2, 4));
        let fill = FillColor::rgba(0, 0, 0, 51);
        let result = offset_f32(img.view(), 1, 0, WrapMode::Off, &fill);

        assert!((result[[0, 0, 3]] - 0.2).abs() < 1e-6);
        assert_eq!(result[[0, 1, 3]], 1.0);
    }

    #[test]
    fn test_offset_beyond_canvas_fills_everything() {
        let img = ramp_f32(3, 4, 3);
        let fill = FillColor::rgb(255, 255, 255);
        for (dx, dy) in [(4, 0), (-4, 0), (0, 3), (0, -100), (4096, 4096)] {
            let result = offset_f32(img.view(), dx, dy, WrapMode::Off, &fill);
            assert!(result.iter().all(|&v| (v - 1.0).abs() < 1e-6), "({dx}, {dy})");
        }

        let mask = Array2::<f32>::ones((3, 4));
        let result = offset_mask_f32(mask.view(), 0, -3, WrapMode::Off);
        assert!(result.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_grayscale_fill_uses_luma() {
        let img = Array3::<u8>::zeros((2, 2, 1));
        let result = offset_u8(img.view(), 0, 1, WrapMode::Off, &FillColor::rgb(255, 255, 255));
        assert_eq!(result[[0, 0, 0]], 255);
        assert_eq!(result[[1, 0, 0]], 0);
    }

    // ========================================================================
    // Masks
    // ========================================================================

    #[test]
    fn test_uniform_mask_wrap_vs_fill() {
        let mask = Array2::<f32>::ones((4, 4));

        let wrapped = offset_mask_f32(mask.view(), 1, 0, WrapMode::On);
        assert_eq!(wrapped, mask);

        let filled = offset_mask_f32(mask.view(), 1, 0, WrapMode::Off);
        for y in 0..4 {
            assert_eq!(filled[[y, 0]], 0.0);
            for x in 1..4 {
                assert_eq!(filled[[y, x]], 1.0);
            }
        }
    }

    #[test]
    fn test_mask_u8_fill_is_zero() {
        let mask = Array2::<u8>::from_elem((3, 3), 255);
        let result = offset_mask_u8(mask.view(), -1, 1, WrapMode::Off);
        assert_eq!(result[[0, 1]], 0);
        assert_eq!(result[[1, 2]], 0);
        assert_eq!(result[[1, 1]], 255);
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = ramp_u8(5, 3, 4);
        let mask = Array2::<u8>::zeros((5, 3));
        for wrap in [WrapMode::Off, WrapMode::On] {
            for (dx, dy) in [(1, 1), (-7, 2), (100, -100)] {
                assert_eq!(offset_u8(img.view(), dx, dy, wrap, &FillColor::DEFAULT).dim(), (5, 3, 4));
                assert_eq!(offset_mask_u8(mask.view(), dx, dy, wrap).dim(), (5, 3));
            }
        }
    }

    #[test]
    fn test_empty_canvas() {
        let img = Array3::<f32>::zeros((0, 4, 3));
        let result = offset_f32(img.view(), 3, 3, WrapMode::On, &FillColor::DEFAULT);
        assert_eq!(result.dim(), (0, 4, 3));
    }
}
