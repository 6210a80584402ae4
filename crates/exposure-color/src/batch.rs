//! Batch conversions
//!
//! The renderer converts one sample per pixel across a whole frame. These
//! helpers run the per-sample conversions from [`color`](crate::color) over
//! slices, either sequentially through a multiversioned kernel or fanned
//! out with rayon. Each element goes through the same pure function, so
//! sequential and parallel output are bit-identical.

use crate::color::{RgbF, RgbU8, RgbaU8, XyzF, XyzaF};
use crate::{Error, Result};
use multiversion::multiversion;
use rayon::prelude::*;
use tracing::debug;

/// Options for batch conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Allow rayon to split the batch across threads
    pub parallel: bool,
    /// Elements per parallel work item. Batches no longer than this run
    /// sequentially.
    pub min_chunk_len: usize,
}

impl BatchOptions {
    /// Default work item size
    pub const DEFAULT_CHUNK_LEN: usize = 4096;

    /// Options that never leave the calling thread
    pub const fn sequential() -> Self {
        Self {
            parallel: false,
            min_chunk_len: Self::DEFAULT_CHUNK_LEN,
        }
    }

    /// Enable or disable rayon dispatch
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the work item size; zero is treated as one
    pub fn with_min_chunk_len(mut self, len: usize) -> Self {
        self.min_chunk_len = len.max(1);
        self
    }

    fn runs_parallel(&self, len: usize) -> bool {
        self.parallel && len > self.min_chunk_len
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            min_chunk_len: Self::DEFAULT_CHUNK_LEN,
        }
    }
}

/// Apply `f` to every element of `src`, writing into `dst`
///
/// Stops at the shorter of the two slices.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn convert_slice<S, D, F>(src: &[S], dst: &mut [D], f: F)
where
    S: Copy,
    F: Fn(S) -> D,
{
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = f(*s);
    }
}

/// Convert `src` into the front of `dst`
///
/// Fails with [`Error::BufferSize`] if `dst` is shorter than `src`.
pub fn convert<S, D, F>(src: &[S], dst: &mut [D], f: F, options: &BatchOptions) -> Result<()>
where
    S: Copy + Sync,
    D: Send,
    F: Fn(S) -> D + Sync,
{
    if dst.len() < src.len() {
        return Err(Error::BufferSize {
            expected: src.len(),
            actual: dst.len(),
        });
    }
    let dst = &mut dst[..src.len()];

    if options.runs_parallel(src.len()) {
        let chunk = options.min_chunk_len.max(1);
        debug!(len = src.len(), chunk, "parallel color batch");
        dst.par_chunks_mut(chunk)
            .zip(src.par_chunks(chunk))
            .for_each(|(d, s)| convert_slice(s, d, &f));
    } else {
        debug!(len = src.len(), "sequential color batch");
        convert_slice(src, dst, &f);
    }
    Ok(())
}

/// Quantized RGB batch to XYZ
pub fn rgbu8_to_xyzf(src: &[RgbU8], dst: &mut [XyzF], options: &BatchOptions) -> Result<()> {
    convert(src, dst, XyzF::from_rgbu8, options)
}

/// Quantized RGBA batch to XYZ, alpha ignored
pub fn rgbau8_to_xyzf(src: &[RgbaU8], dst: &mut [XyzF], options: &BatchOptions) -> Result<()> {
    convert(src, dst, XyzF::from_rgbau8, options)
}

/// Linear RGB batch to XYZ
pub fn rgbf_to_xyzf(src: &[RgbF], dst: &mut [XyzF], options: &BatchOptions) -> Result<()> {
    convert(src, dst, XyzF::from_rgbf, options)
}

/// Linear RGB batch to XYZA with zero alpha
pub fn rgbf_to_xyzaf(src: &[RgbF], dst: &mut [XyzaF], options: &BatchOptions) -> Result<()> {
    convert(src, dst, XyzaF::from_rgbf, options)
}

/// XYZ batch to linear RGB
pub fn xyzf_to_rgbf(src: &[XyzF], dst: &mut [RgbF], options: &BatchOptions) -> Result<()> {
    convert(src, dst, RgbF::from_xyzf, options)
}

/// XYZA batch to linear RGB, alpha ignored
pub fn xyzaf_to_rgbf(src: &[XyzaF], dst: &mut [RgbF], options: &BatchOptions) -> Result<()> {
    convert(src, dst, RgbF::from_xyzaf, options)
}

/// XYZ batch to quantized RGB
pub fn xyzf_to_rgbu8(src: &[XyzF], dst: &mut [RgbU8], options: &BatchOptions) -> Result<()> {
    convert(src, dst, RgbU8::from_xyzf, options)
}

/// XYZ batch to quantized RGBA with zero alpha
pub fn xyzf_to_rgbau8(src: &[XyzF], dst: &mut [RgbaU8], options: &BatchOptions) -> Result<()> {
    convert(src, dst, RgbaU8::from_xyzf, options)
}

/// Per-sample luminance of an XYZ batch
pub fn luminance(src: &[XyzF], dst: &mut [f32], options: &BatchOptions) -> Result<()> {
    convert(src, dst, |xyz: XyzF| xyz.luminance(), options)
}

/// Interleaved RGB8 bytes to XYZ
///
/// `src.len()` must be a multiple of 3.
pub fn rgb8_bytes_to_xyzf(src: &[u8], dst: &mut [XyzF], options: &BatchOptions) -> Result<()> {
    let pixels: &[RgbU8] = bytemuck::try_cast_slice(src)?;
    rgbu8_to_xyzf(pixels, dst, options)
}

/// Interleaved RGBA8 bytes to XYZ, alpha ignored
///
/// `src.len()` must be a multiple of 4.
pub fn rgba8_bytes_to_xyzf(src: &[u8], dst: &mut [XyzF], options: &BatchOptions) -> Result<()> {
    let pixels: &[RgbaU8] = bytemuck::try_cast_slice(src)?;
    rgbau8_to_xyzf(pixels, dst, options)
}

/// XYZ to interleaved RGB8 bytes
pub fn xyzf_to_rgb8_bytes(src: &[XyzF], dst: &mut [u8], options: &BatchOptions) -> Result<()> {
    let pixels: &mut [RgbU8] = bytemuck::try_cast_slice_mut(dst)?;
    xyzf_to_rgbu8(src, pixels, options)
}

/// XYZ to interleaved RGBA8 bytes; written alpha is zero
pub fn xyzf_to_rgba8_bytes(src: &[XyzF], dst: &mut [u8], options: &BatchOptions) -> Result<()> {
    let pixels: &mut [RgbaU8] = bytemuck::try_cast_slice_mut(dst)?;
    xyzf_to_rgbau8(src, pixels, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<RgbU8> {
        (0..len)
            .map(|i| RgbU8::new((i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8))
            .collect()
    }

    #[test]
    fn test_default_options() {
        let opts = BatchOptions::default();
        assert!(opts.parallel);
        assert_eq!(opts.min_chunk_len, BatchOptions::DEFAULT_CHUNK_LEN);
        assert!(!BatchOptions::sequential().parallel);
        assert_eq!(BatchOptions::default().with_min_chunk_len(0).min_chunk_len, 1);
    }

    #[test]
    fn test_convert_slice_matches_per_sample() {
        let src = ramp(64);
        let mut dst = vec![XyzF::black(); 64];
        convert_slice(&src, &mut dst, XyzF::from_rgbu8);
        for (s, d) in src.iter().zip(dst.iter()) {
            assert_eq!(*d, XyzF::from_rgbu8(*s));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let src = ramp(10_000);
        let mut seq = vec![XyzF::black(); src.len()];
        let mut par = vec![XyzF::black(); src.len()];

        rgbu8_to_xyzf(&src, &mut seq, &BatchOptions::sequential()).unwrap();
        let opts = BatchOptions::default().with_min_chunk_len(333);
        rgbu8_to_xyzf(&src, &mut par, &opts).unwrap();
        assert_eq!(seq, par);

        let mut back_seq = vec![RgbU8::black(); src.len()];
        let mut back_par = vec![RgbU8::black(); src.len()];
        xyzf_to_rgbu8(&seq, &mut back_seq, &BatchOptions::sequential()).unwrap();
        xyzf_to_rgbu8(&par, &mut back_par, &opts).unwrap();
        assert_eq!(back_seq, back_par);
    }

    #[test]
    fn test_dst_too_small() {
        let src = ramp(4);
        let mut dst = vec![XyzF::black(); 3];
        let err = rgbu8_to_xyzf(&src, &mut dst, &BatchOptions::default()).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSize {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_dst_longer_than_src() {
        let src = [XyzF::new(1.0, 1.0, 1.0)];
        let mut dst = [-1.0f32; 2];
        luminance(&src, &mut dst, &BatchOptions::default()).unwrap();
        assert!((dst[0] - 1.0).abs() < 1e-6);
        assert_eq!(dst[1], -1.0);
    }

    #[test]
    fn test_byte_buffers() {
        let bytes = [255u8, 255, 255, 0, 0, 0];
        let mut xyz = [XyzF::black(); 2];
        rgb8_bytes_to_xyzf(&bytes, &mut xyz, &BatchOptions::default()).unwrap();
        assert_eq!(xyz[0], XyzF::from_rgbu8(RgbU8::new(255, 255, 255)));
        assert!(xyz[1].is_black());

        let mut out = [7u8; 8];
        xyzf_to_rgba8_bytes(&xyz, &mut out, &BatchOptions::default()).unwrap();
        assert_eq!(&out[4..], &[0, 0, 0, 0]);
        assert_eq!(out[3], 0);

        let mut out = [0u8; 6];
        xyzf_to_rgb8_bytes(&xyz[1..], &mut out, &BatchOptions::default()).unwrap();
        assert_eq!(out, [0; 6]);
    }

    #[test]
    fn test_byte_buffer_with_slop() {
        let bytes = [1u8, 2, 3, 4];
        let mut xyz = [XyzF::black(); 2];
        let err = rgb8_bytes_to_xyzf(&bytes, &mut xyz, &BatchOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Layout(_)));

        let rgba = [1u8, 2, 3, 4, 5, 6, 7, 8];
        rgba8_bytes_to_xyzf(&rgba, &mut xyz, &BatchOptions::default()).unwrap();
        assert_eq!(xyz[1], XyzF::from_rgbau8(RgbaU8::new(5, 6, 7, 8)));
    }

    #[test]
    fn test_float_paths() {
        let rgb = [RgbF::new(0.2, 0.4, 0.6), RgbF::new(1.0, 0.0, 0.0)];
        let mut xyz = [XyzF::black(); 2];
        let mut xyza = [XyzaF::black(); 2];
        let mut back = [RgbF::black(); 2];
        let opts = BatchOptions::default();

        rgbf_to_xyzf(&rgb, &mut xyz, &opts).unwrap();
        rgbf_to_xyzaf(&rgb, &mut xyza, &opts).unwrap();
        xyzf_to_rgbf(&xyz, &mut back, &opts).unwrap();
        for (a, b) in back.iter().zip(rgb.iter()) {
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).abs() < 1e-3);
            }
        }

        let mut from_alpha = [RgbF::black(); 2];
        xyzaf_to_rgbf(&xyza, &mut from_alpha, &opts).unwrap();
        assert_eq!(from_alpha, back);
    }
}
