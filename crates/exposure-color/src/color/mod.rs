//! Color value types
//!
//! Every color is a [`Color<B, T, N>`]: `N` channels of element type `T`,
//! tagged with the basis `B` they are expressed in. The five types the
//! renderer works with are aliases of that one definition:
//!
//! | Alias      | Basis | Element | Channels |
//! |------------|-------|---------|----------|
//! | [`RgbF`]   | RGB   | `f32`   | 3        |
//! | [`XyzF`]   | XYZ   | `f32`   | 3        |
//! | [`XyzaF`]  | XYZ   | `f32`   | 4        |
//! | [`RgbU8`]  | RGB   | `u8`    | 3        |
//! | [`RgbaU8`] | RGB   | `u8`    | 4        |
//!
//! Arithmetic is shared by all of them. Clamping, min/max and [`lerp`] only
//! exist for `f32` elements; luminance only exists on the XYZ types.
//! Conversions between bases live in [`convert`](self::convert).

mod convert;

use crate::matrix;
use crate::vector::{Float, Scalar, Vector};
use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// Marker for the basis a color is expressed in
pub trait Basis: Copy + PartialEq + Debug + Send + Sync + 'static {}

/// Linear-light RGB primaries
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgb;

/// CIE 1931 XYZ tristimulus
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Xyz;

impl Basis for Rgb {}

impl Basis for Xyz {}

/// `N` channels of `T` in basis `B`
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(transparent)]
pub struct Color<B, T, const N: usize> {
    channels: Vector<T, N>,
    basis: PhantomData<B>,
}

/// Linear-light RGB, unclamped
pub type RgbF = Color<Rgb, f32, 3>;
/// CIE XYZ tristimulus values
pub type XyzF = Color<Xyz, f32, 3>;
/// CIE XYZ plus alpha; alpha is carried through arithmetic only
pub type XyzaF = Color<Xyz, f32, 4>;
/// Quantized RGB, one byte per channel
pub type RgbU8 = Color<Rgb, u8, 3>;
/// Quantized RGB with straight alpha
pub type RgbaU8 = Color<Rgb, u8, 4>;

impl<B: Basis, T: Scalar, const N: usize> Color<B, T, N> {
    /// Number of channels
    pub const CHANNELS: usize = N;

    /// Create a color from its channel values
    #[inline]
    pub const fn from_array(channels: [T; N]) -> Self {
        Self::from_vector(Vector::new(channels))
    }

    /// Wrap a vector as a color in basis `B`
    #[inline]
    pub const fn from_vector(channels: Vector<T, N>) -> Self {
        Self {
            channels,
            basis: PhantomData,
        }
    }

    /// All channels zero
    #[inline]
    pub const fn black() -> Self {
        Self::from_vector(Vector::zero())
    }

    /// Channel values as an array
    #[inline]
    pub const fn to_array(&self) -> [T; N] {
        self.channels.to_array()
    }

    /// Channels as a basis-free vector
    #[inline]
    pub const fn vector(&self) -> Vector<T, N> {
        self.channels
    }

    /// Channels as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.channels.as_slice()
    }

    /// Iterate over the channels in storage order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.channels.iter()
    }

    /// True iff every channel is exactly zero
    #[inline]
    pub fn is_black(&self) -> bool {
        self.channels.is_zero()
    }

    /// The first three channels, i.e. the part a basis change acts on
    #[inline]
    pub(crate) fn tristimulus(&self) -> [T; 3] {
        [self.channels[0], self.channels[1], self.channels[2]]
    }
}

impl<B: Basis, T: Float, const N: usize> Color<B, T, N> {
    /// Channel-wise minimum
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self::from_vector(self.channels.min(rhs.channels))
    }

    /// Channel-wise maximum
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self::from_vector(self.channels.max(rhs.channels))
    }

    /// Clamp every channel to `[lo, hi]`
    #[inline]
    pub fn clamp(self, lo: T, hi: T) -> Self {
        Self::from_vector(self.channels.clamp(lo, hi))
    }
}

impl<B: Basis, const N: usize> Color<B, f32, N> {
    /// Linear interpolation from `self` towards `to`, see [`lerp`]
    #[inline]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        lerp(t, self, to)
    }
}

/// Linear interpolation `a + t * (b - a)`
///
/// Evaluated as `(1 - t) * a + t * b`, which is the same line but lands on
/// `a` and `b` exactly at `t = 0` and `t = 1`. `t` is not clamped, values
/// outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp<B: Basis, const N: usize>(
    t: f32,
    a: Color<B, f32, N>,
    b: Color<B, f32, N>,
) -> Color<B, f32, N> {
    a * (1.0 - t) + b * t
}

impl<T: Scalar> Color<Rgb, T, 3> {
    /// Create an RGB color
    #[inline]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self::from_array([r, g, b])
    }

    /// Red channel
    #[inline]
    pub fn r(&self) -> T {
        self[0]
    }

    /// Green channel
    #[inline]
    pub fn g(&self) -> T {
        self[1]
    }

    /// Blue channel
    #[inline]
    pub fn b(&self) -> T {
        self[2]
    }
}

impl<T: Scalar> Color<Rgb, T, 4> {
    /// Create an RGBA color
    #[inline]
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self::from_array([r, g, b, a])
    }

    /// Red channel
    #[inline]
    pub fn r(&self) -> T {
        self[0]
    }

    /// Green channel
    #[inline]
    pub fn g(&self) -> T {
        self[1]
    }

    /// Blue channel
    #[inline]
    pub fn b(&self) -> T {
        self[2]
    }

    /// Alpha channel
    #[inline]
    pub fn a(&self) -> T {
        self[3]
    }
}

impl<T: Scalar> Color<Xyz, T, 3> {
    /// Create an XYZ color
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// X channel
    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }

    /// The `Y` channel as stored, not [`luminance`](XyzF::luminance)
    /// Y channel
    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }

    /// Z channel
    #[inline]
    pub fn z(&self) -> T {
        self[2]
    }
}

impl<T: Scalar> Color<Xyz, T, 4> {
    /// Create an XYZA color
    #[inline]
    pub const fn new(x: T, y: T, z: T, a: T) -> Self {
        Self::from_array([x, y, z, a])
    }

    /// X channel
    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }

    /// Y channel
    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }

    /// Z channel
    #[inline]
    pub fn z(&self) -> T {
        self[2]
    }

    /// Alpha channel
    #[inline]
    pub fn a(&self) -> T {
        self[3]
    }
}

impl XyzF {
    /// Luminance: `0.212671 X + 0.715160 Y + 0.072169 Z`
    ///
    /// This is the renderer's importance metric and uses
    /// [`matrix::LUMINANCE_WEIGHTS`] verbatim.
    #[inline]
    pub fn luminance(&self) -> f32 {
        matrix::luminance(self.tristimulus())
    }
}

impl XyzaF {
    /// Luminance of the XYZ part; alpha does not contribute
    #[inline]
    pub fn luminance(&self) -> f32 {
        matrix::luminance(self.tristimulus())
    }
}

impl<B: Basis, T: Scalar, const N: usize> Default for Color<B, T, N> {
    fn default() -> Self {
        Self::black()
    }
}

impl<B: Basis, T: Scalar, const N: usize> From<[T; N]> for Color<B, T, N> {
    fn from(arr: [T; N]) -> Self {
        Self::from_array(arr)
    }
}

impl<B: Basis, T: Scalar, const N: usize> From<Color<B, T, N>> for [T; N] {
    fn from(color: Color<B, T, N>) -> Self {
        color.to_array()
    }
}

impl<B: Basis, T: Scalar, const N: usize> From<Vector<T, N>> for Color<B, T, N> {
    fn from(v: Vector<T, N>) -> Self {
        Self::from_vector(v)
    }
}

impl<B, T, const N: usize> Index<usize> for Color<B, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.channels[i]
    }
}

impl<B, T, const N: usize> IndexMut<usize> for Color<B, T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.channels[i]
    }
}

impl<B: Basis, T: Scalar, const N: usize> Add for Color<B, T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_vector(self.channels + rhs.channels)
    }
}

impl<B: Basis, T: Scalar, const N: usize> Sub for Color<B, T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_vector(self.channels - rhs.channels)
    }
}

impl<B: Basis, T: Scalar, const N: usize> Mul<T> for Color<B, T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::from_vector(self.channels * rhs)
    }
}

impl<B: Basis, const N: usize> Mul<Color<B, f32, N>> for f32 {
    type Output = Color<B, f32, N>;

    #[inline]
    fn mul(self, rhs: Color<B, f32, N>) -> Color<B, f32, N> {
        rhs * self
    }
}

impl<B: Basis, const N: usize> Mul<Color<B, u8, N>> for u8 {
    type Output = Color<B, u8, N>;

    #[inline]
    fn mul(self, rhs: Color<B, u8, N>) -> Color<B, u8, N> {
        rhs * self
    }
}

impl<B: Basis, T: Scalar, const N: usize> AddAssign for Color<B, T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.channels += rhs.channels;
    }
}

impl<B: Basis, T: Scalar, const N: usize> SubAssign for Color<B, T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.channels -= rhs.channels;
    }
}

impl<B: Basis, T: Scalar, const N: usize> MulAssign<T> for Color<B, T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.channels *= rhs;
    }
}
