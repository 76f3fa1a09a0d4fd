use crate::{frame::Frame, sine_table::SineTable, voices::Voices};

/// Sums every voice into a single mono signal.
#[derive(Debug, Clone, Copy)]
pub struct Mixer<'a> {
    voices: &'a Voices,
    table: &'a SineTable,
}

impl<'a> Mixer<'a> {
    pub fn new(voices: &'a Voices, table: &'a SineTable) -> Self {
        Self { voices, table }
    }

    /// The mean of all voices on frame `sample_index`, in -1..1. A mixer with
    /// no voices is silent.
    pub fn amplitude(&self, sample_index: u64) -> f64 {
        if self.voices.is_empty() {
            return 0.0;
        }
        let sum = self
            .voices
            .iter()
            .map(|freq_hz| self.table.sin(sample_index, freq_hz))
            .sum::<f64>();
        sum / self.voices.len() as f64
    }

    pub fn frame(&self, sample_index: u64) -> Frame {
        Frame::from_amplitude(self.amplitude(sample_index))
    }

    /// The first `total_samples` frames in order.
    pub fn frames(self, total_samples: u64) -> Frames<'a> {
        Frames {
            mixer: self,
            next_index: 0,
            total_samples,
        }
    }
}

/// Lazily computes frames in increasing sample index order. Each frame is
/// computed once, when it is requested.
pub struct Frames<'a> {
    mixer: Mixer<'a>,
    next_index: u64,
    total_samples: u64,
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.total_samples {
            return None;
        }
        let frame = self.mixer.frame(self.next_index);
        self.next_index += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_samples - self.next_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}
