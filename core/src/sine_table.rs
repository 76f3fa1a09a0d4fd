use crate::config::TABLE_RESOLUTION_DIVISOR;
use std::f64::consts::PI;

/// One period of a sine wave sampled at a fixed resolution, so the mixer can
/// look up each voice's value rather than calling `sin` per voice per frame.
///
/// Phase is quantized to `1 / len()` of a cycle. This error is not
/// interpolated away.
#[derive(Debug, Clone)]
pub struct SineTable {
    sample_rate_hz: u32,
    table: Vec<f64>,
}

impl SineTable {
    pub fn new(sample_rate_hz: u32) -> Self {
        Self::with_size(
            sample_rate_hz,
            (sample_rate_hz / TABLE_RESOLUTION_DIVISOR) as usize,
        )
    }

    pub fn with_size(sample_rate_hz: u32, size: usize) -> Self {
        assert!(size > 0, "The sine table must have at least one entry");
        let step = (PI * 2.0) / size as f64;
        let table = (0..size).map(|i| (i as f64 * step).sin()).collect();
        Self {
            sample_rate_hz,
            table,
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.table
    }

    /// Index into the table of an oscillator at `freq_hz` on the frame
    /// `sample_index`. Completed cycles are discarded.
    pub fn index(&self, sample_index: u64, freq_hz: f64) -> usize {
        let t_s = sample_index as f64 / self.sample_rate_hz as f64;
        let phase_01 = (t_s * freq_hz).fract();
        (phase_01 * self.table.len() as f64) as usize % self.table.len()
    }

    pub fn sin(&self, sample_index: u64, freq_hz: f64) -> f64 {
        self.table[self.index(sample_index, freq_hz)]
    }
}
