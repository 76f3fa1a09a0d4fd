/// Logs how far through a render we are, once per percent.
pub struct Progress {
    step: u64,
}

impl Progress {
    pub fn new(total_samples: u64) -> Self {
        Self {
            step: (total_samples / 100).max(1),
        }
    }

    /// Returns the percentage reached if `sample_index` is the first frame of
    /// a new percent.
    pub fn percent(&self, sample_index: u64) -> Option<u64> {
        if sample_index % self.step == 0 {
            Some(sample_index / self.step)
        } else {
            None
        }
    }

    pub fn tick(&self, sample_index: u64) {
        if let Some(percent) = self.percent(sample_index) {
            log::info!("Done {percent} of 100");
        }
    }
}
