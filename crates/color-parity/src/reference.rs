//! Reference implementation wrappers
//!
//! `palette` derives its linear-sRGB ↔ XYZ matrices from the sRGB primaries
//! and D65 white point rather than using fixed literals, so it agrees with
//! exposure-color only up to the rounding of the published coefficients.

use exposure_color::{RgbF, XyzF};
use palette::{FromColor, LinSrgb, Xyz};

/// Linear RGB to XYZ using palette
pub fn rgbf_to_xyzf_palette(rgb: RgbF) -> XyzF {
    let xyz: Xyz = Xyz::from_color(LinSrgb::new(rgb.r(), rgb.g(), rgb.b()));
    XyzF::new(xyz.x, xyz.y, xyz.z)
}

/// XYZ to linear RGB using palette
pub fn xyzf_to_rgbf_palette(xyz: XyzF) -> RgbF {
    let rgb: LinSrgb = LinSrgb::from_color(Xyz::new(xyz.x(), xyz.y(), xyz.z()));
    RgbF::new(rgb.red, rgb.green, rgb.blue)
}

/// Expected agreement with palette, per channel
pub const PALETTE_TOLERANCE: f32 = 2e-4;
