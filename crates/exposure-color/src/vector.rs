//! Fixed-length numeric tuples
//!
//! `Vector<T, N>` is the storage and arithmetic primitive behind every color
//! type. Element arithmetic goes through [`Scalar`] so that the 8-bit
//! instantiations wrap instead of panicking on overflow, and the
//! floating-point-only operations (min/max/clamp) are gated on [`Float`].

use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// Element type of a [`Vector`]
pub trait Scalar: Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// Additive identity
    const ZERO: Self;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
}

/// Floating-point element type
pub trait Float: Scalar {
    const ONE: Self;

    fn min(self, rhs: Self) -> Self;
    fn max(self, rhs: Self) -> Self;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl Float for f32 {
    const ONE: Self = 1.0;

    #[inline]
    fn min(self, rhs: Self) -> Self {
        f32::min(self, rhs)
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        f32::max(self, rhs)
    }
}

// Quantized channels use modular arithmetic; keeping products in range is
// the caller's job.
impl Scalar for u8 {
    const ZERO: Self = 0;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

/// A fixed-length tuple of `N` scalars
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a vector from its components
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    /// All components zero
    #[inline]
    pub const fn zero() -> Self {
        Self([T::ZERO; N])
    }

    /// All components set to `value`
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Components as an array
    #[inline]
    pub const fn to_array(&self) -> [T; N] {
        self.0
    }

    /// Components as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Iterate over the components
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Apply `f` to every component
    #[inline]
    pub fn map<U: Scalar>(self, f: impl Fn(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Combine two vectors component by component
    #[inline]
    pub fn zip_with(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o = f(*o, r);
        }
        Self(out)
    }

    /// True iff every component compares equal to zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == T::ZERO)
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Component-wise minimum
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::min)
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::max)
    }

    /// Clamp every component to `[lo, hi]`
    #[inline]
    pub fn clamp(self, lo: T, hi: T) -> Self {
        self.map(|c| c.max(lo).min(hi))
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(arr: [T; N]) -> Self {
        Self(arr)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, Scalar::add)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, Scalar::sub)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.map(|c| Scalar::mul(c, rhs))
    }
}

impl<const N: usize> Mul<Vector<f32, N>> for f32 {
    type Output = Vector<f32, N>;

    #[inline]
    fn mul(self, rhs: Vector<f32, N>) -> Vector<f32, N> {
        rhs * self
    }
}

impl<const N: usize> Mul<Vector<u8, N>> for u8 {
    type Output = Vector<u8, N>;

    #[inline]
    fn mul(self, rhs: Vector<u8, N>) -> Vector<u8, N> {
        rhs * self
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}
