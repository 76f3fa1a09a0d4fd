use anyhow::{Result, bail};

pub const SAMPLE_RATE_HZ: u32 = 48_000;
pub const BASE_FREQ_HZ: f64 = 432.0;
pub const NUM_VOICES: usize = 512;

/// Voice multipliers are folded back down whenever they exceed this ratio.
pub const OCTAVE: f64 = 2.0;

/// Ratio between the multipliers of consecutive voices (before folding).
pub const HARMONIC_STEP: f64 = 1.5;

/// The sine table holds `sample_rate_hz / TABLE_RESOLUTION_DIVISOR` entries.
pub const TABLE_RESOLUTION_DIVISOR: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    pub sample_rate_hz: u32,
    pub base_freq_hz: f64,
    pub num_voices: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: SAMPLE_RATE_HZ,
            base_freq_hz: BASE_FREQ_HZ,
            num_voices: NUM_VOICES,
        }
    }
}

impl SynthConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate_hz < TABLE_RESOLUTION_DIVISOR {
            bail!(
                "sample rate must be at least {} Hz (got {} Hz)",
                TABLE_RESOLUTION_DIVISOR,
                self.sample_rate_hz
            );
        }
        if !self.base_freq_hz.is_finite() || self.base_freq_hz <= 0.0 {
            bail!(
                "base frequency must be a positive number of Hz (got {})",
                self.base_freq_hz
            );
        }
        Ok(())
    }

    pub fn table_size(&self) -> usize {
        (self.sample_rate_hz / TABLE_RESOLUTION_DIVISOR) as usize
    }

    /// The number of frames in a render of `length_s` seconds, rounded to the
    /// nearest frame.
    pub fn total_samples(&self, length_s: f64) -> Result<u64> {
        if !length_s.is_finite() || length_s < 0.0 {
            bail!("length must be a non-negative number of seconds (got {length_s})");
        }
        Ok((self.sample_rate_hz as f64 * length_s).round() as u64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_table_size() {
        assert_eq!(SynthConfig::default().table_size(), 2666);
    }

    #[test]
    fn total_samples_rounds_to_nearest_frame() {
        let config = SynthConfig::default();
        assert_eq!(config.total_samples(1.0).unwrap(), 48_000);
        assert_eq!(config.total_samples(5.0).unwrap(), 240_000);
        assert_eq!(config.total_samples(0.25).unwrap(), 12_000);
        // 0.00001s is 0.48 frames
        assert_eq!(config.total_samples(0.00001).unwrap(), 0);
        // 0.00002s is 0.96 frames
        assert_eq!(config.total_samples(0.00002).unwrap(), 1);
        assert_eq!(config.total_samples(0.0).unwrap(), 0);
    }

    #[test]
    fn invalid_lengths() {
        let config = SynthConfig::default();
        assert!(config.total_samples(-1.0).is_err());
        assert!(config.total_samples(f64::NAN).is_err());
        assert!(config.total_samples(f64::INFINITY).is_err());
    }

    #[test]
    fn invalid_configs() {
        assert!(SynthConfig::default().validate().is_ok());
        let config = SynthConfig {
            sample_rate_hz: 17,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = SynthConfig {
            base_freq_hz: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = SynthConfig {
            base_freq_hz: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
