/// A single 32-bit PCM sample.
///
/// The container is unsigned but always holds the two's-complement bit
/// pattern of a signed sample, so negative amplitudes survive the trip to
/// the WAV writer unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame(pub u32);

impl Frame {
    /// Scale an amplitude in -1..1 to the signed 32-bit range, truncating
    /// towards zero. Amplitudes outside -1..1 saturate.
    pub fn from_amplitude(amplitude: f64) -> Self {
        let sample = (amplitude * i32::MAX as f64) as i32;
        Self::from_i32(sample)
    }

    pub fn from_i32(sample: i32) -> Self {
        Self(sample as u32)
    }

    pub fn to_i32(self) -> i32 {
        self.0 as i32
    }
}
