//! Fill color parsing and per-channel conversion.
//!
//! Accepted forms:
//! - `r,g,b` or `r,g,b,a` decimal components, 0-255 each (`"0,0,0"`, `"255,255,255,128"`)
//! - `RRGGBB` or `RRGGBBAA` hex, optionally prefixed with `#`
//!
//! RGB forms are opaque. Anything else is rejected by [`FillColor::parse`];
//! [`FillColor::parse_or_default`] falls back to opaque black instead.

use std::str::FromStr;

use crate::error::OffsetError;

/// ITU-R BT.709 luminosity coefficients, used for single-channel images
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// RGBA fill color, 8 bits per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for FillColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FillColor {
    /// Opaque black, used when a color string cannot be parsed.
    pub const DEFAULT: FillColor = FillColor::rgba(0, 0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color string.
    pub fn parse(s: &str) -> Result<Self, OffsetError> {
        let trimmed = s.trim();
        let invalid = || OffsetError::InvalidColor(s.to_string());

        if !trimmed.contains(',') {
            let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
            return parse_hex(hex).ok_or_else(invalid);
        }

        let parts = trimmed
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| invalid())?;

        match parts.as_slice() {
            &[r, g, b] => Ok(Self::rgb(r, g, b)),
            &[r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(invalid()),
        }
    }

    /// Parse a color string, falling back to [`FillColor::DEFAULT`].
    pub fn parse_or_default(s: &str) -> Self {
        match Self::parse(s) {
            Ok(color) => color,
            Err(err) => {
                log::warn!("{err}, using opaque black");
                Self::DEFAULT
            }
        }
    }

    /// BT.709 luminosity of the RGB components (0-255 scale).
    pub fn luma(&self) -> f32 {
        LUMA_R * self.r as f32 + LUMA_G * self.g as f32 + LUMA_B * self.b as f32
    }

    /// Fill pixel in the 0-255 range for an image with `channels` channels.
    ///
    /// | Channels | Pixel |
    /// |----------|-------|
    /// | 1 | luma |
    /// | 2 | luma, alpha |
    /// | 3 | R, G, B (alpha ignored) |
    /// | 4+ | R, G, B, A, then zeros |
    pub fn to_pixel_u8(&self, channels: usize) -> Vec<u8> {
        let luma = self.luma().round().clamp(0.0, 255.0) as u8;
        self.layout(channels, luma)
    }

    /// Fill pixel in the 0.0-1.0 range for an image with `channels` channels.
    pub fn to_pixel_f32(&self, channels: usize) -> Vec<f32> {
        match channels {
            1 => vec![self.luma() / 255.0],
            2 => vec![self.luma() / 255.0, self.a as f32 / 255.0],
            _ => self
                .layout(channels, 0)
                .into_iter()
                .map(|v| v as f32 / 255.0)
                .collect(),
        }
    }

    fn layout(&self, channels: usize, luma: u8) -> Vec<u8> {
        match channels {
            0 => Vec::new(),
            1 => vec![luma],
            2 => vec![luma, self.a],
            3 => vec![self.r, self.g, self.b],
            n => {
                let mut pixel = vec![0u8; n];
                pixel[..4].copy_from_slice(&[self.r, self.g, self.b, self.a]);
                pixel
            }
        }
    }
}

impl FromStr for FillColor {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_hex(hex: &str) -> Option<FillColor> {
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let alpha = if hex.len() == 8 { byte(6)? } else { 255 };
    Some(FillColor::rgba(byte(0)?, byte(2)?, byte(4)?, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_rgb_is_opaque() {
        assert_eq!(FillColor::parse("0,0,0").unwrap(), FillColor::rgba(0, 0, 0, 255));
        assert_eq!(FillColor::parse(" 10, 20 ,30 ").unwrap(), FillColor::rgb(10, 20, 30));
    }

    #[test]
    fn test_parse_decimal_rgba() {
        assert_eq!(
            FillColor::parse("255,255,255,128").unwrap(),
            FillColor::rgba(255, 255, 255, 128)
        );
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(FillColor::parse("ff8000").unwrap(), FillColor::rgb(255, 128, 0));
        assert_eq!(FillColor::parse("#FF800040").unwrap(), FillColor::rgba(255, 128, 0, 64));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "   ", "1,2", "1,2,3,4,5", "256,0,0", "-1,0,0", "a,b,c", "ff80", "gg0000", "1,,3"] {
            assert!(FillColor::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_or_default_falls_back_to_opaque_black() {
        assert_eq!(FillColor::parse_or_default("not a color"), FillColor::DEFAULT);
        assert_eq!(FillColor::parse_or_default("1,2,3"), FillColor::rgb(1, 2, 3));
        assert_eq!(FillColor::DEFAULT.a, 255);
    }

    #[test]
    fn test_pixel_ignores_alpha_for_rgb() {
        let color = FillColor::rgba(255, 0, 51, 128);
        assert_eq!(color.to_pixel_u8(3), vec![255, 0, 51]);
        assert_eq!(color.to_pixel_u8(4), vec![255, 0, 51, 128]);

        let px = color.to_pixel_f32(3);
        assert_eq!(px.len(), 3);
        assert!((px[0] - 1.0).abs() < 1e-6);
        assert!((px[2] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_pixel_grayscale_uses_luma() {
        let white = FillColor::rgb(255, 255, 255);
        assert!((white.to_pixel_f32(1)[0] - 1.0).abs() < 1e-4);
        assert_eq!(white.to_pixel_u8(1), vec![255]);

        let green = FillColor::rgba(0, 255, 0, 10);
        // 0.7152 * 255 ≈ 182
        assert_eq!(green.to_pixel_u8(2), vec![182, 10]);
    }

    #[test]
    fn test_pixel_extra_channels_are_zero() {
        assert_eq!(FillColor::rgba(1, 2, 3, 4).to_pixel_u8(6), vec![1, 2, 3, 4, 0, 0]);
        assert!(FillColor::DEFAULT.to_pixel_f32(0).is_empty());
    }
}
