pub mod config;
pub use config::{
    BASE_FREQ_HZ, HARMONIC_STEP, NUM_VOICES, OCTAVE, SAMPLE_RATE_HZ,
    SynthConfig, TABLE_RESOLUTION_DIVISOR,
};
pub mod voices;
pub use voices::{Voices, fold_octaves};
pub mod sine_table;
pub use sine_table::SineTable;
pub mod frame;
pub use frame::Frame;
pub mod mixer;
pub use mixer::{Frames, Mixer};
pub mod sink;
pub use sink::FrameSink;
