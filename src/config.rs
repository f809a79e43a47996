//! Node parameters and their host-facing defaults.
//!
//! Mirrors the parameter schema the host GUI exposes for the node:
//!
//! | Parameter | Type | Default | Range |
//! |-----------|------|---------|-------|
//! | `offset_x` | int | 0 | -4096..=4096 |
//! | `offset_y` | int | 0 | -4096..=4096 |
//! | `wrap_around` | "Off" / "On" | "Off" | |
//! | `fill_color` | string | "0,0,0" | see [`FillColor`](crate::filters::color::FillColor) |
//! | `invert_mask_output` | "No" / "Yes" | "No" | |

use std::fmt;
use std::str::FromStr;

use crate::error::OffsetError;

/// Smallest accepted offset on either axis.
pub const OFFSET_MIN: i32 = -4096;
/// Largest accepted offset on either axis.
pub const OFFSET_MAX: i32 = 4096;

/// (height, width) of the placeholder outputs when no input is connected.
pub const EMPTY_CANVAS: (usize, usize) = (64, 64);

/// Default fill color string.
pub const DEFAULT_FILL_COLOR: &str = "0,0,0";

/// Clamp an offset to `[OFFSET_MIN, OFFSET_MAX]`.
#[inline]
pub fn clamp_offset(value: i32) -> i32 {
    value.clamp(OFFSET_MIN, OFFSET_MAX)
}

fn parse_toggle(param: &'static str, value: &str, off: &str, on: &str) -> Result<bool, OffsetError> {
    let v = value.trim();
    if v.eq_ignore_ascii_case(on) || v.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if v.eq_ignore_ascii_case(off) || v.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(OffsetError::InvalidChoice {
            param,
            value: value.to_string(),
        })
    }
}

// ============================================================================
// Wrap Mode
// ============================================================================

/// Whether content shifted past an edge re-enters on the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Exposed regions are filled with the fill color
    #[default]
    Off,
    /// Circular shift, tiling the content
    On,
}

impl WrapMode {
    #[inline]
    pub fn is_on(self) -> bool {
        self == WrapMode::On
    }
}

impl From<bool> for WrapMode {
    fn from(wrap: bool) -> Self {
        if wrap {
            WrapMode::On
        } else {
            WrapMode::Off
        }
    }
}

impl FromStr for WrapMode {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_toggle("wrap_around", s, "Off", "On").map(WrapMode::from)
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WrapMode::Off => "Off",
            WrapMode::On => "On",
        })
    }
}

// ============================================================================
// Mask Invert
// ============================================================================

/// Whether the output mask is inverted after the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskInvert {
    #[default]
    No,
    Yes,
}

impl MaskInvert {
    #[inline]
    pub fn is_yes(self) -> bool {
        self == MaskInvert::Yes
    }
}

impl From<bool> for MaskInvert {
    fn from(invert: bool) -> Self {
        if invert {
            MaskInvert::Yes
        } else {
            MaskInvert::No
        }
    }
}

impl FromStr for MaskInvert {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_toggle("invert_mask_output", s, "No", "Yes").map(MaskInvert::from)
    }
}

impl fmt::Display for MaskInvert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MaskInvert::No => "No",
            MaskInvert::Yes => "Yes",
        })
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Parameters of one node invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetParams {
    pub offset_x: i32,
    pub offset_y: i32,
    pub wrap: WrapMode,
    /// Unparsed fill color; malformed values fall back at apply time
    pub fill_color: String,
    pub invert_mask: MaskInvert,
}

impl Default for OffsetParams {
    fn default() -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            wrap: WrapMode::Off,
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            invert_mask: MaskInvert::No,
        }
    }
}

impl OffsetParams {
    pub fn new(offset_x: i32, offset_y: i32) -> Self {
        Self {
            offset_x,
            offset_y,
            ..Self::default()
        }
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_fill_color(mut self, fill_color: impl Into<String>) -> Self {
        self.fill_color = fill_color.into();
        self
    }

    pub fn with_invert_mask(mut self, invert_mask: MaskInvert) -> Self {
        self.invert_mask = invert_mask;
        self
    }

    /// Offsets clamped to the accepted range.
    pub fn clamped_offsets(&self) -> (i32, i32) {
        let dx = clamp_offset(self.offset_x);
        let dy = clamp_offset(self.offset_y);
        if dx != self.offset_x || dy != self.offset_y {
            log::debug!(
                "offset ({}, {}) clamped to ({}, {})",
                self.offset_x,
                self.offset_y,
                dx,
                dy
            );
        }
        (dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_host_schema() {
        let params = OffsetParams::default();
        assert_eq!(params.offset_x, 0);
        assert_eq!(params.offset_y, 0);
        assert_eq!(params.wrap, WrapMode::Off);
        assert_eq!(params.fill_color, "0,0,0");
        assert_eq!(params.invert_mask, MaskInvert::No);
    }

    #[test]
    fn test_clamped_offsets() {
        assert_eq!(OffsetParams::new(5000, -9000).clamped_offsets(), (4096, -4096));
        assert_eq!(OffsetParams::new(-12, 4096).clamped_offsets(), (-12, 4096));
        assert_eq!(clamp_offset(i32::MIN), OFFSET_MIN);
    }

    #[test]
    fn test_wrap_mode_parse() {
        assert_eq!("On".parse::<WrapMode>().unwrap(), WrapMode::On);
        assert_eq!("off".parse::<WrapMode>().unwrap(), WrapMode::Off);
        assert_eq!(" true ".parse::<WrapMode>().unwrap(), WrapMode::On);
        assert!("sideways".parse::<WrapMode>().is_err());
    }

    #[test]
    fn test_mask_invert_parse_and_display() {
        assert_eq!("Yes".parse::<MaskInvert>().unwrap(), MaskInvert::Yes);
        assert_eq!("no".parse::<MaskInvert>().unwrap(), MaskInvert::No);
        assert!("maybe".parse::<MaskInvert>().is_err());
        assert_eq!(MaskInvert::Yes.to_string(), "Yes");
        assert_eq!(WrapMode::from(true).to_string(), "On");
    }
}
