//! Image Offset
//!
//! Shifts an image and an optional mask by integer X/Y offsets, with
//! optional wrap-around (tiling) or a solid fill color for exposed regions,
//! and optional inversion of the output mask. Exposed to Python via PyO3
//! (`python` feature) and to JavaScript via wasm-bindgen (`wasm` feature).
//!
//! ## Image Format
//! - **Image**: (height, width, channels) with 1, 3, or 4 channels, or a
//!   (batch, height, width, channels) stack of them
//! - **Mask**: (height, width), or a (batch, height, width) stack
//!
//! Both bit depths are supported by the filters:
//! - `u8`: 8-bit per channel (0-255)
//! - `f32`: Float per channel (0.0-1.0)
//!
//! The node level ([`OffsetNode`]) works on f32 batches, the layout the host
//! passes its tensors in.
//!
//! ## Example
//! ```
//! use image_offset::{OffsetNode, OffsetParams, WrapMode};
//! use ndarray::Array4;
//!
//! let image = Array4::<f32>::ones((1, 8, 8, 3));
//! let node = OffsetNode::new(OffsetParams::new(2, -1).with_wrap(WrapMode::On));
//! let out = node.apply(Some(image.view()), None);
//! assert_eq!(out.image.dim(), (1, 8, 8, 3));
//! assert_eq!(out.info, "Offset: (2, -1), Size: 8x8, Wrapped: On, Mask Output Inverted: No");
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod node;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{MaskInvert, OffsetParams, WrapMode, OFFSET_MAX, OFFSET_MIN};
pub use error::OffsetError;
pub use filters::color::FillColor;
pub use node::{OffsetNode, OffsetOutput};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{
        IntoPyArray, PyArray2, PyArray3, PyArray4, PyReadonlyArray2, PyReadonlyArray3,
        PyReadonlyArrayDyn,
    };
    use pyo3::prelude::*;

    use crate::config::{OffsetParams, WrapMode};
    use crate::filters::color::FillColor;
    use crate::filters::mask::{invert_mask_f32, invert_mask_u8};
    use crate::filters::offset::{offset_f32, offset_mask_f32, offset_mask_u8, offset_u8};
    use crate::node::{image_batch_view, mask_batch_view, OffsetNode};

    // ========================================================================
    // Node Entry Point
    // ========================================================================

    /// Apply the offset node to host tensors.
    ///
    /// Parameter names and defaults match the node's input schema.
    ///
    /// # Arguments
    /// * `offset_x` / `offset_y` - Offsets, clamped to -4096..=4096
    /// * `wrap_around` - "Off" or "On"
    /// * `fill_color` - "r,g,b", "r,g,b,a" or hex; malformed values become opaque black
    /// * `invert_mask_output` - "No" or "Yes"
    /// * `image` - Optional f32 image (H, W, C) or batch (B, H, W, C)
    /// * `mask` - Optional f32 mask (H, W) or batch (B, H, W)
    ///
    /// # Returns
    /// Tuple (image, mask, offset_x, offset_y, info)
    #[pyfunction]
    #[pyo3(signature = (
        offset_x=0,
        offset_y=0,
        wrap_around="Off",
        fill_color="0,0,0",
        invert_mask_output="No",
        image=None,
        mask=None
    ))]
    #[allow(clippy::too_many_arguments, clippy::type_complexity)]
    pub fn apply_offset<'py>(
        py: Python<'py>,
        offset_x: i32,
        offset_y: i32,
        wrap_around: &str,
        fill_color: &str,
        invert_mask_output: &str,
        image: Option<PyReadonlyArrayDyn<'py, f32>>,
        mask: Option<PyReadonlyArrayDyn<'py, f32>>,
    ) -> PyResult<(Bound<'py, PyArray4<f32>>, Bound<'py, PyArray3<f32>>, i32, i32, String)> {
        let params = OffsetParams {
            offset_x,
            offset_y,
            wrap: wrap_around.parse()?,
            fill_color: fill_color.to_string(),
            invert_mask: invert_mask_output.parse()?,
        };

        let image_view = image.as_ref().map(|a| image_batch_view(a.as_array())).transpose()?;
        let mask_view = mask.as_ref().map(|a| mask_batch_view(a.as_array())).transpose()?;

        let output = OffsetNode::new(params).apply(image_view, mask_view);
        Ok((
            output.image.into_pyarray(py),
            output.mask.into_pyarray(py),
            output.offset_x,
            output.offset_y,
            output.info,
        ))
    }

    // ========================================================================
    // Image Filters
    // ========================================================================

    /// Offset a u8 image (H, W, C) with wrap-around or fill.
    #[pyfunction]
    #[pyo3(signature = (image, offset_x, offset_y, wrap=false, fill_color="0,0,0"))]
    pub fn offset_image<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        offset_x: i32,
        offset_y: i32,
        wrap: bool,
        fill_color: &str,
    ) -> Bound<'py, PyArray3<u8>> {
        let fill = FillColor::parse_or_default(fill_color);
        let result = offset_u8(image.as_array(), offset_x, offset_y, WrapMode::from(wrap), &fill);
        result.into_pyarray(py)
    }

    /// Offset an f32 image (H, W, C) with wrap-around or fill.
    ///
    /// Input/output values are 0.0-1.0.
    #[pyfunction]
    #[pyo3(signature = (image, offset_x, offset_y, wrap=false, fill_color="0,0,0"))]
    pub fn offset_image_f32<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        offset_x: i32,
        offset_y: i32,
        wrap: bool,
        fill_color: &str,
    ) -> Bound<'py, PyArray3<f32>> {
        let fill = FillColor::parse_or_default(fill_color);
        let result = offset_f32(image.as_array(), offset_x, offset_y, WrapMode::from(wrap), &fill);
        result.into_pyarray(py)
    }

    // ========================================================================
    // Mask Filters
    // ========================================================================

    /// Offset a u8 mask (H, W). Exposed regions become 0.
    #[pyfunction]
    #[pyo3(signature = (mask, offset_x, offset_y, wrap=false, invert=false))]
    pub fn offset_mask<'py>(
        py: Python<'py>,
        mask: PyReadonlyArray2<'py, u8>,
        offset_x: i32,
        offset_y: i32,
        wrap: bool,
        invert: bool,
    ) -> Bound<'py, PyArray2<u8>> {
        let shifted = offset_mask_u8(mask.as_array(), offset_x, offset_y, WrapMode::from(wrap));
        let result = if invert { invert_mask_u8(shifted.view()) } else { shifted };
        result.into_pyarray(py)
    }

    /// Offset an f32 mask (H, W). Exposed regions become 0.0.
    #[pyfunction]
    #[pyo3(name = "offset_mask_f32", signature = (mask, offset_x, offset_y, wrap=false, invert=false))]
    pub fn offset_mask_f32_py<'py>(
        py: Python<'py>,
        mask: PyReadonlyArray2<'py, f32>,
        offset_x: i32,
        offset_y: i32,
        wrap: bool,
        invert: bool,
    ) -> Bound<'py, PyArray2<f32>> {
        let shifted = offset_mask_f32(mask.as_array(), offset_x, offset_y, WrapMode::from(wrap));
        let result = if invert { invert_mask_f32(shifted.view()) } else { shifted };
        result.into_pyarray(py)
    }

    // ========================================================================
    // Module Definition
    // ========================================================================

    #[pymodule]
    pub fn image_offset(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Node entry point
        m.add_function(wrap_pyfunction!(apply_offset, m)?)?;

        // Filters
        m.add_function(wrap_pyfunction!(offset_image, m)?)?;
        m.add_function(wrap_pyfunction!(offset_image_f32, m)?)?;
        m.add_function(wrap_pyfunction!(offset_mask, m)?)?;
        m.add_function(wrap_pyfunction!(offset_mask_f32_py, m)?)?;

        // Parameter limits
        m.add("OFFSET_MIN", crate::config::OFFSET_MIN)?;
        m.add("OFFSET_MAX", crate::config::OFFSET_MAX)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::image_offset;
