//! Accuracy measurement for color conversions
//!
//! Conversions are compared channel by channel in absolute terms, which is
//! what the round-trip tolerances are stated in.

/// Statistics from a per-channel comparison
#[derive(Debug, Clone, Default)]
pub struct ChannelErrorStats {
    /// Mean absolute error across all channels
    pub mean: f64,
    /// Maximum absolute error
    pub max: f64,
    /// Number of channels compared
    pub count: usize,
}

impl ChannelErrorStats {
    /// Check if every channel is within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }

    /// Check if the two inputs were identical
    pub fn is_exact(&self) -> bool {
        self.max == 0.0
    }

    fn from_diffs(diffs: impl Iterator<Item = f64>) -> Self {
        let mut sum = 0.0;
        let mut max: f64 = 0.0;
        let mut count = 0;
        for d in diffs {
            sum += d;
            max = max.max(d);
            count += 1;
        }
        let mean = if count == 0 { 0.0 } else { sum / count as f64 };
        Self { mean, max, count }
    }
}

/// Compare two float channel sequences
pub fn compare_f32<'a>(
    reference: impl IntoIterator<Item = &'a f32>,
    result: impl IntoIterator<Item = &'a f32>,
) -> ChannelErrorStats {
    ChannelErrorStats::from_diffs(
        reference
            .into_iter()
            .zip(result)
            .map(|(a, b)| (*a as f64 - *b as f64).abs()),
    )
}

/// Compare two 8-bit channel sequences
pub fn compare_u8<'a>(
    reference: impl IntoIterator<Item = &'a u8>,
    result: impl IntoIterator<Item = &'a u8>,
) -> ChannelErrorStats {
    ChannelErrorStats::from_diffs(
        reference
            .into_iter()
            .zip(result)
            .map(|(a, b)| (*a as f64 - *b as f64).abs()),
    )
}
