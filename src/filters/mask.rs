//! Mask helpers: inversion, nearest-neighbour resize, bit depth conversion.
//!
//! Masks are single-channel planes of shape (height, width), either f32
//! (0.0-1.0) or u8 (0-255).

use ndarray::{Array2, ArrayView2};

/// Invert an f32 mask (1.0 - v).
pub fn invert_mask_f32(input: ArrayView2<f32>) -> Array2<f32> {
    input.mapv(|v| 1.0 - v)
}

/// Invert a u8 mask (255 - v).
pub fn invert_mask_u8(input: ArrayView2<u8>) -> Array2<u8> {
    input.mapv(|v| 255 - v)
}

/// Resize a mask with nearest-neighbour sampling.
///
/// Source index for output `x` is `floor((x + 0.5) * src_w / dst_w)`, which
/// keeps pixel centres aligned. Returns a copy when the size already matches
/// and zeros when the source is empty.
pub fn resize_nearest<T: Copy + Default>(input: ArrayView2<T>, height: usize, width: usize) -> Array2<T> {
    let (src_h, src_w) = input.dim();

    if (src_h, src_w) == (height, width) {
        return input.to_owned();
    }
    if src_h == 0 || src_w == 0 {
        return Array2::from_elem((height, width), T::default());
    }

    let map = |pos: usize, src: usize, dst: usize| -> usize {
        let s = ((pos as f64 + 0.5) * src as f64 / dst as f64).floor() as usize;
        s.min(src - 1)
    };
    let xs: Vec<usize> = (0..width).map(|x| map(x, src_w, width)).collect();
    let ys: Vec<usize> = (0..height).map(|y| map(y, src_h, height)).collect();

    Array2::from_shape_fn((height, width), |(y, x)| input[[ys[y], xs[x]]])
}

/// Convert u8 mask (0-255) to f32 (0.0-1.0)
pub fn mask_u8_to_f32(input: ArrayView2<u8>) -> Array2<f32> {
    input.mapv(|v| v as f32 / 255.0)
}

/// Convert f32 mask (0.0-1.0) to u8 (0-255)
pub fn mask_f32_to_u8(input: ArrayView2<f32>) -> Array2<u8> {
    input.mapv(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}
