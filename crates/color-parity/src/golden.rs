//! Golden fixtures
//!
//! `testdata/golden.json` holds conversions computed with the fixed
//! coefficient table in strict f32 arithmetic, evaluated in the same order
//! as the renderer. Downstream renders compare against these values, so
//! they are checked bit for bit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One reference conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoldenCase {
    /// `XyzF::from_rgbu8`
    Rgbu8ToXyzf { input: [u8; 3], expected: [f32; 3] },
    /// `XyzF::from_rgbf`
    RgbfToXyzf { input: [f32; 3], expected: [f32; 3] },
    /// `RgbF::from_xyzf`
    XyzfToRgbf { input: [f32; 3], expected: [f32; 3] },
    /// `RgbU8::from_xyzf`
    XyzfToRgbu8 { input: [f32; 3], expected: [u8; 3] },
    /// `XyzF::luminance`
    Luminance { input: [f32; 3], expected: f32 },
}

/// A named collection of golden cases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenSet {
    pub description: String,
    pub cases: Vec<GoldenCase>,
}

impl GoldenSet {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Directory holding fixture files
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Load a golden set from `testdata/<name>`
pub fn load_golden(name: &str) -> anyhow::Result<GoldenSet> {
    let path = testdata_dir().join(name);
    let data = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&data)?)
}
