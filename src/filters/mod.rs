//! Pixel-level building blocks of the offset node.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale | (H, W, 1) | u8 / f32 | Single luminance channel |
//! | RGB | (H, W, 3) | u8 / f32 | Red, green, blue |
//! | RGBA | (H, W, 4) | u8 / f32 | RGB + alpha |
//! | Mask | (H, W) | u8 / f32 | Single-channel selection / opacity |
//!
//! u8 values are 0-255, f32 values are 0.0-1.0. Channel count is inferred
//! from the input array dimensions.
//!
//! ## Modules
//!
//! - **offset**: integer translation with wrap-around or fill
//! - **color**: fill color parsing and per-channel conversion
//! - **mask**: invert, nearest-neighbour resize, bit depth conversion

pub mod color;
pub mod mask;
pub mod offset;
