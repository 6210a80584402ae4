//! Round-trip accuracy between RGB and XYZ
//!
//! The two matrices are only approximately inverse, so round trips are
//! checked against a fixed tolerance rather than for equality.

use color_parity::accuracy::compare_f32;
use color_parity::patterns::{TestPattern, generate_pattern, random_rgbf, random_xyzf};
use exposure_color::{RgbF, RgbU8, RgbaU8, XyzF, XyzaF};

const ROUNDTRIP_TOLERANCE: f64 = 1e-3;

#[test]
fn test_rgb_xyz_rgb_within_tolerance() {
    for rgb in random_rgbf(0xC0FFEE, 10_000) {
        let back = RgbF::from_xyzf(XyzF::from_rgbf(rgb));
        let stats = compare_f32(rgb.iter(), back.iter());
        assert!(
            stats.within(ROUNDTRIP_TOLERANCE),
            "{:?} -> {:?}, max error {}",
            rgb,
            back,
            stats.max
        );
    }
}

#[test]
fn test_xyz_rgb_xyz_within_tolerance() {
    for xyz in random_xyzf(0xBEEF, 10_000) {
        let back = XyzF::from_rgbf(RgbF::from_xyzf(xyz));
        let stats = compare_f32(xyz.iter(), back.iter());
        assert!(stats.within(ROUNDTRIP_TOLERANCE), "{:?} -> {:?}", xyz, back);
    }
}

#[test]
fn test_xyza_path_matches_xyz_path() {
    for rgb in random_rgbf(5, 1000) {
        let via_alpha = RgbF::from_xyzaf(XyzaF::from_rgbf(rgb));
        let via_plain = RgbF::from_xyzf(XyzF::from_rgbf(rgb));
        assert_eq!(via_alpha, via_plain);
    }
}

#[test]
fn test_red_u8_roundtrip_within_one() {
    let red = RgbU8::new(255, 0, 0);
    let back = RgbU8::from_xyzf(XyzF::from_rgbu8(red));
    for (a, b) in back.iter().zip(red.iter()) {
        assert!((*a as i32 - *b as i32).abs() <= 1, "{:?}", back);
    }
}

#[test]
fn test_u8_roundtrip_loses_at_most_one_step() {
    // Truncation can only round down, and the matrix pair is accurate to
    // well under one 8-bit step over the unit cube.
    let samples = [
        generate_pattern(TestPattern::ColorCube, 8),
        generate_pattern(TestPattern::ChannelRamps, 768),
        generate_pattern(TestPattern::Random(99), 5000),
    ]
    .concat();

    let mut exact = 0usize;
    for rgb in &samples {
        let back = RgbU8::from_xyzf(XyzF::from_rgbu8(*rgb));
        for (a, b) in back.iter().zip(rgb.iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1, "{:?} -> {:?}", rgb, back);
        }
        if back == *rgb {
            exact += 1;
        }
    }
    eprintln!("{}/{} samples survive unchanged", exact, samples.len());
}

#[test]
fn test_rgba_roundtrip_drops_alpha() {
    let rgba = RgbaU8::new(255, 0, 0, 200);
    let back = RgbaU8::from_xyzf(XyzF::from_rgbau8(rgba));
    assert_eq!(back.a(), 0);
    assert!((back.r() as i32 - 255).abs() <= 1);
}
