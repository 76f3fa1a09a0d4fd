pub mod progress;
pub mod render;

pub mod prelude {
    pub use crate::progress::Progress;
    pub use crate::render::{
        RenderState, RenderSummary, Renderer, render_to_file,
    };
    pub use drone_audio_file::{WavSink, read_wav_mono};
    pub use drone_core::{Frame, FrameSink, SynthConfig};
}
