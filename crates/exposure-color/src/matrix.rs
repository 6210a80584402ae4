//! RGB↔XYZ constant table
//!
//! The coefficients below are part of the renderer's numeric contract:
//! golden images depend on these exact f32 literals, so they are written
//! out rather than derived from primaries.

use std::ops::{Index, Mul};

/// A 3x3 matrix for color basis changes
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f32; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Each row is evaluated left to right as `m0 * v0 + m1 * v1 + m2 * v2`.
    /// Keep that order: it is what reference renders were produced with.
    #[inline]
    pub fn multiply_vec(&self, v: [f32; 3]) -> [f32; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Returns self × other
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::new([[0.0; 3]; 3]);
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f32; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<[f32; 3]> for Matrix3x3 {
    type Output = [f32; 3];

    fn mul(self, rhs: [f32; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

/// Linear RGB to CIE XYZ
pub const RGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
]);

/// CIE XYZ to linear RGB
///
/// Approximate inverse of [`RGB_TO_XYZ`]; round trips are not exact.
pub const XYZ_TO_RGB: Matrix3x3 = Matrix3x3::new([
    [3.240479, -1.537150, -0.498535],
    [-0.969256, 1.875991, 0.041556],
    [0.055648, -0.204043, 1.057311],
]);

/// Weights of the luminance (`Y`) sum
pub const LUMINANCE_WEIGHTS: [f32; 3] = [0.212671, 0.715160, 0.072169];

/// Full-scale value of an 8-bit channel
pub const QUANTIZE_SCALE: f32 = 255.0;

/// Weighted luminance sum of the first three channels
#[inline]
pub fn luminance(c: [f32; 3]) -> f32 {
    LUMINANCE_WEIGHTS[0] * c[0] + LUMINANCE_WEIGHTS[1] * c[1] + LUMINANCE_WEIGHTS[2] * c[2]
}

/// 8-bit channel to [0, 1]
#[inline]
pub fn normalize(c: u8) -> f32 {
    c as f32 / QUANTIZE_SCALE
}

/// [0, 1] channel to 8-bit: scale, truncate toward zero, then clamp
///
/// Truncation happens before clamping, so anything below 1/255 lands on 0
/// and negative values never wrap. NaN maps to 0.
#[inline]
pub fn quantize(v: f32) -> u8 {
    ((QUANTIZE_SCALE * v) as i32).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let v = [0.25, 0.5, 0.75];
        assert_eq!(Matrix3x3::identity().multiply_vec(v), v);
        assert_eq!(Matrix3x3::default() * v, v);
    }

    #[test]
    fn test_rgb_xyz_inverse() {
        let product = RGB_TO_XYZ * XYZ_TO_RGB;
        assert!(product.approx_eq(&Matrix3x3::identity(), 1e-4));
        let product = XYZ_TO_RGB.multiply(&RGB_TO_XYZ);
        assert!(product.approx_eq(&Matrix3x3::identity(), 1e-4));
    }

    #[test]
    fn test_luminance_weights_are_y_row() {
        assert_eq!(LUMINANCE_WEIGHTS, RGB_TO_XYZ[1]);
        let sum: f32 = LUMINANCE_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_white_maps_to_d65() {
        let white = RGB_TO_XYZ.multiply_vec([1.0, 1.0, 1.0]);
        assert!((white[0] - 0.950456).abs() < 1e-5);
        assert!((white[1] - 1.0).abs() < 1e-5);
        assert!((white[2] - 1.088754).abs() < 1e-5);
    }

    #[test]
    fn test_quantize_truncates_then_clamps() {
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.999), 254);
        assert_eq!(quantize(0.5), 127);
        assert_eq!(quantize(-10.0 / 255.0), 0);
        assert_eq!(quantize(300.0 / 255.0), 255);
        assert_eq!(quantize(-0.001), 0);
        assert_eq!(quantize(f32::NAN), 0);
        assert_eq!(quantize(f32::INFINITY), 255);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(0), 0.0);
        assert_eq!(normalize(255), 1.0);
        assert!((normalize(51) - 0.2).abs() < 1e-7);
    }
}
