use crate::progress::Progress;
use anyhow::{Context, bail};
use drone_audio_file::WavSink;
use drone_core::{FrameSink, Mixer, SineTable, SynthConfig, Voices};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Uninitialized,
    Building,
    Streaming,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSummary {
    pub num_frames: u64,
    pub length_s: f64,
}

/// Renders a drone into a `FrameSink` exactly once.
pub struct Renderer {
    config: SynthConfig,
    state: RenderState,
}

impl Renderer {
    pub fn new(config: SynthConfig) -> Self {
        Self {
            config,
            state: RenderState::Uninitialized,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Write `length_s` seconds of audio to `sink` and close it. If any frame
    /// fails to be written the sink is dropped without being closed and the
    /// error is returned. Either way the renderer ends up closed.
    pub fn render<S: FrameSink>(
        &mut self,
        length_s: f64,
        sink: S,
    ) -> anyhow::Result<RenderSummary> {
        if self.state != RenderState::Uninitialized {
            bail!("renderer has already run (state: {:?})", self.state);
        }
        let result = self.render_inner(length_s, sink);
        self.state = RenderState::Closed;
        result
    }

    fn render_inner<S: FrameSink>(
        &mut self,
        length_s: f64,
        mut sink: S,
    ) -> anyhow::Result<RenderSummary> {
        self.config.validate()?;
        let total_samples = self.config.total_samples(length_s)?;
        log::info!("generating a {length_s} sec sample");
        self.state = RenderState::Building;
        let voices =
            Voices::new(self.config.base_freq_hz, self.config.num_voices);
        let table = SineTable::with_size(
            self.config.sample_rate_hz,
            self.config.table_size(),
        );
        log::debug!(
            "{} voices, sine table of {} entries",
            voices.len(),
            table.len()
        );
        self.state = RenderState::Streaming;
        let progress = Progress::new(total_samples);
        let frames = Mixer::new(&voices, &table).frames(total_samples);
        for (sample_index, frame) in (0..).zip(frames) {
            sink.write_frame(frame).with_context(|| {
                format!("error writing frame {sample_index}")
            })?;
            progress.tick(sample_index);
        }
        sink.close().context("error closing output")?;
        log::info!("Done!");
        Ok(RenderSummary {
            num_frames: total_samples,
            length_s,
        })
    }
}

/// Render `length_s` seconds to a wav file at `path`. The configuration and
/// length are checked before the file is created, and the file is created
/// before any synthesis starts.
pub fn render_to_file(
    config: SynthConfig,
    length_s: f64,
    path: impl AsRef<Path>,
) -> anyhow::Result<RenderSummary> {
    config.validate()?;
    config.total_samples(length_s)?;
    let sink = WavSink::create(path, config.sample_rate_hz)?;
    Renderer::new(config).render(length_s, sink)
}
