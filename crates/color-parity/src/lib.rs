//! # color-parity
//!
//! Parity and property testing for exposure-color.
//!
//! This crate provides:
//! - Channel error statistics for comparing conversion outputs
//! - Deterministic sample generation (seeded ChaCha8)
//! - Golden fixtures: reference inputs/outputs produced with the fixed
//!   RGB↔XYZ coefficient table
//! - An independent linear-sRGB → XYZ reference via `palette`
//!
//! ## Test Categories
//!
//! 1. **Round trips**: RGB→XYZ→RGB and XYZ→RGB→XYZ tolerance
//! 2. **Quantization**: truncate-then-clamp into 8-bit
//! 3. **Golden parity**: bit-level agreement with reference renders
//! 4. **Parallel parity**: rayon batches match sequential calls
//! 5. **Arithmetic**: commutativity, lerp endpoints, blackness

pub mod accuracy;
pub mod golden;
pub mod patterns;
pub mod reference;

pub use accuracy::{ChannelErrorStats, compare_f32, compare_u8};
pub use golden::{GoldenCase, GoldenSet, load_golden};
pub use patterns::{TestPattern, generate_pattern};
