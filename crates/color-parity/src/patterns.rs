//! Test pattern generation
//!
//! Deterministic sample sets for conversion tests. Random patterns use a
//! seeded ChaCha8 so failures reproduce.

use exposure_color::{RgbF, RgbU8, XyzF, XyzaF};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Grayscale ramp 0-255
    Grayscale,
    /// Every value of one channel with the others at zero
    ChannelRamps,
    /// Random pixels with seed
    Random(u64),
    /// All zeros (black)
    Black,
    /// All 255 (white)
    White,
}

/// Generate `count` quantized samples
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<RgbU8> {
    match pattern {
        TestPattern::ColorCube => {
            const CORNERS: [[u8; 3]; 8] = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            (0..count).map(|i| RgbU8::from_array(CORNERS[i % 8])).collect()
        }
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = ((i as f32 / count as f32) * 255.0) as u8;
                RgbU8::new(v, v, v)
            })
            .collect(),
        TestPattern::ChannelRamps => (0..count)
            .map(|i| {
                let mut c = RgbU8::black();
                c[(i / 256) % 3] = (i % 256) as u8;
                c
            })
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut data = vec![0u8; count * 3];
            rng.fill_bytes(&mut data);
            data.chunks_exact(3)
                .map(|c| RgbU8::new(c[0], c[1], c[2]))
                .collect()
        }
        TestPattern::Black => vec![RgbU8::black(); count],
        TestPattern::White => vec![RgbU8::new(255, 255, 255); count],
    }
}

/// Random linear RGB with every channel in `[0, 1)`
pub fn random_rgbf(seed: u64, count: usize) -> Vec<RgbF> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| RgbF::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
        .collect()
}

/// Random XYZ inside the image of the unit RGB cube
pub fn random_xyzf(seed: u64, count: usize) -> Vec<XyzF> {
    random_rgbf(seed, count)
        .into_iter()
        .map(XyzF::from_rgbf)
        .collect()
}

/// Random XYZA with unconstrained channels in `[-range, range)`
pub fn random_xyzaf(seed: u64, count: usize, range: f32) -> Vec<XyzaF> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| XyzaF::from_array(std::array::from_fn(|_| rng.gen_range(-range..range))))
        .collect()
}

/// Standard batch sizes
pub mod sizes {
    pub const TINY: usize = 64;
    pub const SMALL: usize = 4096;
    pub const FRAME_720P: usize = 1280 * 720;
}
