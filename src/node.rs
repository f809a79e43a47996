//! The offset node: applies the offset filter to batched host tensors.
//!
//! The host passes images as (batch, height, width, channels) and masks as
//! (batch, height, width), both f32 in 0.0-1.0, and either may be missing.
//!
//! Missing inputs degrade to defaults rather than failing:
//! - no image and no mask: 64x64 zero image and mask, info "No Image or Mask Input"
//! - no image: zero RGB image sized like the mask
//! - no mask: all-zero mask sized like the image (still subject to invert)
//!
//! A mask whose size differs from the image is resized (nearest neighbour)
//! before the shift. When batch counts differ, the shorter batch is cycled,
//! so a single mask applies to every image in a batch.

use ndarray::{Array3, Array4, ArrayView3, ArrayView4, ArrayViewD, Axis, Ix3, Ix4};
use rayon::prelude::*;

use crate::config::{OffsetParams, EMPTY_CANVAS};
use crate::error::{OffsetError, Result};
use crate::filters::color::FillColor;
use crate::filters::mask::{invert_mask_f32, resize_nearest};
use crate::filters::offset::{offset_f32, offset_mask_f32};

/// Info string reported when neither an image nor a mask is connected.
pub const NO_INPUT_INFO: &str = "No Image or Mask Input";

/// Everything the node hands back to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetOutput {
    /// (batch, height, width, channels)
    pub image: Array4<f32>,
    /// (batch, height, width)
    pub mask: Array3<f32>,
    /// Horizontal offset actually applied (after clamping)
    pub offset_x: i32,
    /// Vertical offset actually applied (after clamping)
    pub offset_y: i32,
    pub info: String,
}

/// Offset node bound to one set of parameters.
#[derive(Debug, Clone, Default)]
pub struct OffsetNode {
    params: OffsetParams,
}

impl OffsetNode {
    pub fn new(params: OffsetParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &OffsetParams {
        &self.params
    }

    /// Offset an image batch and a mask batch.
    ///
    /// # Arguments
    /// * `image` - Optional image batch (batch, height, width, channels)
    /// * `mask` - Optional mask batch (batch, height, width)
    ///
    /// # Returns
    /// Shifted image and mask, the applied offsets and an info string
    pub fn apply(&self, image: Option<ArrayView4<f32>>, mask: Option<ArrayView3<f32>>) -> OffsetOutput {
        let (dx, dy) = self.params.clamped_offsets();
        let wrap = self.params.wrap;
        let invert = self.params.invert_mask;

        // Zero-length batches carry no data; treat them as disconnected
        let image = image.filter(|v| v.dim().0 > 0);
        let mask = mask.filter(|v| v.dim().0 > 0);

        let (height, width) = match (&image, &mask) {
            (Some(img), _) => (img.dim().1, img.dim().2),
            (None, Some(m)) => (m.dim().1, m.dim().2),
            (None, None) => {
                let (h, w) = EMPTY_CANVAS;
                return OffsetOutput {
                    image: Array4::zeros((1, h, w, 3)),
                    mask: Array3::zeros((1, h, w)),
                    offset_x: dx,
                    offset_y: dy,
                    info: NO_INPUT_INFO.to_string(),
                };
            }
        };

        let batch = image
            .map(|v| v.dim().0)
            .into_iter()
            .chain(mask.map(|v| v.dim().0))
            .max()
            .unwrap_or(1);

        let out_image = match image {
            Some(image) => {
                let fill = FillColor::parse_or_default(&self.params.fill_color);
                let image_batch = image.dim().0;
                let channels = image.dim().3;
                let mut out = Array4::<f32>::zeros((batch, height, width, channels));
                out.axis_iter_mut(Axis(0))
                    .into_par_iter()
                    .enumerate()
                    .for_each(|(i, mut item)| {
                        let src = image.index_axis(Axis(0), i % image_batch);
                        item.assign(&offset_f32(src, dx, dy, wrap, &fill));
                    });
                out
            }
            None => Array4::zeros((batch, height, width, 3)),
        };

        let out_mask = match mask {
            Some(mask) => {
                let mask_batch = mask.dim().0;
                let mut out = Array3::<f32>::zeros((batch, height, width));
                out.axis_iter_mut(Axis(0))
                    .into_par_iter()
                    .enumerate()
                    .for_each(|(i, mut item)| {
                        let src = mask.index_axis(Axis(0), i % mask_batch);
                        let shifted = if src.dim() == (height, width) {
                            offset_mask_f32(src, dx, dy, wrap)
                        } else {
                            offset_mask_f32(resize_nearest(src, height, width).view(), dx, dy, wrap)
                        };
                        if invert.is_yes() {
                            item.assign(&invert_mask_f32(shifted.view()));
                        } else {
                            item.assign(&shifted);
                        }
                    });
                out
            }
            // Shifting an all-zero mask leaves it all zero
            None => Array3::from_elem((batch, height, width), if invert.is_yes() { 1.0 } else { 0.0 }),
        };

        let mut info = format!(
            "Offset: ({}, {}), Size: {}x{}, Wrapped: {}, Mask Output Inverted: {}",
            dx, dy, width, height, wrap, invert
        );
        if batch > 1 {
            info.push_str(&format!(", Batch: {batch}"));
        }
        log::debug!("{info}");

        OffsetOutput {
            image: out_image,
            mask: out_mask,
            offset_x: dx,
            offset_y: dy,
            info,
        }
    }
}

// ============================================================================
// Batch Views
// ============================================================================

/// Read a dynamic-rank image as a batch.
///
/// (H, W, C) becomes a batch of one; (B, H, W, C) is used as is.
pub fn image_batch_view<A>(image: ArrayViewD<'_, A>) -> Result<ArrayView4<'_, A>> {
    match image.ndim() {
        3 => Ok(image.insert_axis(Axis(0)).into_dimensionality::<Ix4>()?),
        4 => Ok(image.into_dimensionality::<Ix4>()?),
        rank => Err(OffsetError::UnsupportedRank { input: "image", rank }),
    }
}

/// Read a dynamic-rank mask as a batch.
///
/// (H, W) becomes a batch of one; (B, H, W) is used as is; (B, H, W, 1) has
/// its channel axis dropped.
pub fn mask_batch_view<A>(mask: ArrayViewD<'_, A>) -> Result<ArrayView3<'_, A>> {
    match mask.ndim() {
        2 => Ok(mask.insert_axis(Axis(0)).into_dimensionality::<Ix3>()?),
        3 => Ok(mask.into_dimensionality::<Ix3>()?),
        4 if mask.shape()[3] == 1 => Ok(mask.index_axis_move(Axis(3), 0).into_dimensionality::<Ix3>()?),
        rank => Err(OffsetError::UnsupportedRank { input: "mask", rank }),
    }
}
