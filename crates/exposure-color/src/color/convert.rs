//! Named conversions between color bases
//!
//! One function per (source, destination) pair. Pairs not listed here
//! (e.g. `RgbU8` to `XyzaF`) have no conversion.
//!
//! Quantized input is normalised with `/ 255` before the matrix; quantized
//! output is scaled by 255, truncated and clamped (see [`matrix::quantize`]).
//! Alpha is never transformed. Conversions that create an alpha channel
//! leave it at zero, the same as [`Color::black`].

use super::{RgbF, RgbU8, RgbaU8, XyzF, XyzaF};
use crate::matrix::{self, RGB_TO_XYZ, XYZ_TO_RGB};

impl RgbF {
    /// CIE XYZ to linear RGB
    #[inline]
    pub fn from_xyzf(xyz: XyzF) -> Self {
        Self::from_array(XYZ_TO_RGB.multiply_vec(xyz.to_array()))
    }

    /// CIE XYZA to linear RGB; alpha is dropped
    #[inline]
    pub fn from_xyzaf(xyza: XyzaF) -> Self {
        Self::from_array(XYZ_TO_RGB.multiply_vec(xyza.tristimulus()))
    }
}

impl XyzF {
    /// Linear RGB to CIE XYZ
    #[inline]
    pub fn from_rgbf(rgb: RgbF) -> Self {
        Self::from_array(RGB_TO_XYZ.multiply_vec(rgb.to_array()))
    }

    /// Quantized RGB to CIE XYZ
    #[inline]
    pub fn from_rgbu8(rgb: RgbU8) -> Self {
        Self::from_array(RGB_TO_XYZ.multiply_vec(rgb.to_array().map(matrix::normalize)))
    }

    /// Quantized RGBA to CIE XYZ; alpha is dropped
    #[inline]
    pub fn from_rgbau8(rgba: RgbaU8) -> Self {
        Self::from_array(RGB_TO_XYZ.multiply_vec(rgba.tristimulus().map(matrix::normalize)))
    }
}

impl XyzaF {
    /// Linear RGB to CIE XYZA; alpha is left at zero
    #[inline]
    pub fn from_rgbf(rgb: RgbF) -> Self {
        let [x, y, z] = RGB_TO_XYZ.multiply_vec(rgb.to_array());
        Self::new(x, y, z, 0.0)
    }
}

impl RgbU8 {
    /// CIE XYZ to quantized RGB
    #[inline]
    pub fn from_xyzf(xyz: XyzF) -> Self {
        Self::from_array(XYZ_TO_RGB.multiply_vec(xyz.to_array()).map(matrix::quantize))
    }
}

impl RgbaU8 {
    /// CIE XYZ to quantized RGBA; alpha is left at zero
    #[inline]
    pub fn from_xyzf(xyz: XyzF) -> Self {
        let [r, g, b] = XYZ_TO_RGB.multiply_vec(xyz.to_array()).map(matrix::quantize);
        Self::new(r, g, b, 0)
    }
}
