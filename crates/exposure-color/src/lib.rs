//! # exposure-color
//!
//! Color value types for the Exposure volume renderer: linear RGB, CIE XYZ,
//! XYZ with alpha, and 8-bit RGB/RGBA, plus the conversions, clamping,
//! interpolation and luminance operations between them.
//!
//! Every per-sample operation is a pure function over `Copy` values with no
//! allocation, no global state and no failure path, so the same code runs
//! from a single call on the host or once per pixel across a parallel
//! batch (see [`batch`]).
//!
//! ## Quick Start
//!
//! ```
//! use exposure_color::{RgbU8, XyzF, lerp};
//!
//! let red = RgbU8::new(255, 0, 0);
//! let xyz = XyzF::from_rgbu8(red);
//! assert!(xyz.luminance() > 0.0);
//!
//! let dimmed = lerp(0.5, XyzF::black(), xyz);
//! let back = RgbU8::from_xyzf(dimmed);
//! assert!(back.r() >= 126 && back.r() <= 128);
//! ```
//!
//! ## Numeric contract
//!
//! The RGB↔XYZ coefficients and luminance weights in [`matrix`] are fixed
//! literals. Float to 8-bit conversion truncates and then clamps to
//! `[0, 255]`; it never wraps.

pub mod batch;
pub mod color;
pub mod error;
pub mod matrix;
pub mod scene;
pub mod vector;

pub use batch::BatchOptions;
pub use color::{Basis, Color, Rgb, RgbF, RgbU8, RgbaU8, Xyz, XyzF, XyzaF, lerp};
pub use error::{Error, Result};
pub use matrix::{LUMINANCE_WEIGHTS, Matrix3x3, RGB_TO_XYZ, XYZ_TO_RGB};
pub use scene::{DEFAULT_IOR, SceneObject, TextureChannel, TextureId, TextureTable};
pub use vector::{Float, Scalar, Vector};

/// Version of exposure-color
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
