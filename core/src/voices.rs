use crate::config::{HARMONIC_STEP, OCTAVE};

/// Divide `target` by `divider` until it is no greater than `limit`.
pub fn fold_octaves(mut target: f64, divider: f64, limit: f64) -> f64 {
    while target > limit {
        target /= divider;
    }
    target
}

/// The frequencies of every oscillator in the drone, in the order they were
/// generated.
///
/// Each voice is a perfect fifth above the previous one, folded down by
/// octaves so that all voices stay within one octave above the base
/// frequency. The first voice is a fifth above the base frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Voices {
    freqs_hz: Vec<f64>,
}

impl Voices {
    pub fn new(base_freq_hz: f64, num_voices: usize) -> Self {
        let mut multiplier = HARMONIC_STEP;
        let freqs_hz = (0..num_voices)
            .map(|_| {
                let freq_hz = base_freq_hz * multiplier;
                multiplier =
                    fold_octaves(multiplier * HARMONIC_STEP, OCTAVE, OCTAVE);
                freq_hz
            })
            .collect();
        Self { freqs_hz }
    }

    pub fn freqs_hz(&self) -> &[f64] {
        &self.freqs_hz
    }

    pub fn len(&self) -> usize {
        self.freqs_hz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs_hz.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.freqs_hz.iter().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{BASE_FREQ_HZ, NUM_VOICES};

    #[test]
    fn fold_octaves_stops_at_limit() {
        assert_eq!(fold_octaves(2.25, 2.0, 2.0), 1.125);
        assert_eq!(fold_octaves(2.0, 2.0, 2.0), 2.0);
        assert_eq!(fold_octaves(9.0, 2.0, 2.0), 1.125);
        assert_eq!(fold_octaves(0.5, 2.0, 2.0), 0.5);
    }

    #[test]
    fn first_voices() {
        let voices = Voices::new(BASE_FREQ_HZ, 4);
        assert_eq!(voices.freqs_hz(), &[648.0, 486.0, 729.0, 546.75]);
    }

    #[test]
    fn voice_count() {
        assert_eq!(Voices::new(BASE_FREQ_HZ, NUM_VOICES).len(), NUM_VOICES);
        assert!(Voices::new(BASE_FREQ_HZ, 0).is_empty());
    }

    #[test]
    fn voices_stay_within_an_octave_of_base() {
        let voices = Voices::new(BASE_FREQ_HZ, NUM_VOICES);
        for freq_hz in voices.iter() {
            assert!(freq_hz >= BASE_FREQ_HZ / OCTAVE, "{freq_hz}");
            assert!(freq_hz <= BASE_FREQ_HZ * OCTAVE, "{freq_hz}");
            assert!(freq_hz > BASE_FREQ_HZ, "{freq_hz}");
        }
    }
}
