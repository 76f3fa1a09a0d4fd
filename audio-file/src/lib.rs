use anyhow::{Context, bail};
use drone_core::{Frame, FrameSink};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Seek, Write},
    path::Path,
};

pub const BITS_PER_SAMPLE: u16 = 32;

pub fn wav_spec_mono(sample_rate_hz: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes frames to a mono 32-bit integer PCM wav file. The header is
/// finalized by `close`, or on drop if the sink is abandoned part way
/// through.
pub struct WavSink<W>
where
    W: Write + Seek,
{
    writer: WavWriter<W>,
}

impl WavSink<BufWriter<File>> {
    pub fn create(
        path: impl AsRef<Path>,
        sample_rate_hz: u32,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let writer = WavWriter::create(path, wav_spec_mono(sample_rate_hz))
            .with_context(|| format!("error creating {}", path.display()))?;
        log::debug!("opened {} for writing", path.display());
        Ok(Self { writer })
    }
}

impl<W> WavSink<W>
where
    W: Write + Seek,
{
    pub fn new(writer: W, sample_rate_hz: u32) -> anyhow::Result<Self> {
        let writer = WavWriter::new(writer, wav_spec_mono(sample_rate_hz))?;
        Ok(Self { writer })
    }

    pub fn num_frames(&self) -> u32 {
        self.writer.len()
    }
}

impl<W> FrameSink for WavSink<W>
where
    W: Write + Seek,
{
    fn write_frame(&mut self, frame: Frame) -> anyhow::Result<()> {
        self.writer.write_sample(frame.to_i32())?;
        Ok(())
    }

    fn close(self) -> anyhow::Result<()> {
        self.writer.finalize()?;
        Ok(())
    }
}

pub struct WavMono {
    pub sample_rate_hz: u32,
    pub frames: Vec<Frame>,
}

pub fn parse_wav_mono(buffer: &[u8]) -> anyhow::Result<WavMono> {
    let mut reader = WavReader::new(BufReader::new(buffer))?;
    let spec = reader.spec();
    if spec.channels != 1 {
        bail!("expected a mono wav file (got {} channels)", spec.channels);
    }
    if spec.sample_format != SampleFormat::Int
        || spec.bits_per_sample != BITS_PER_SAMPLE
    {
        bail!(
            "expected 32-bit integer samples (got {}-bit {:?})",
            spec.bits_per_sample,
            spec.sample_format
        );
    }
    let frames = reader
        .samples::<i32>()
        .map(|x| x.map(Frame::from_i32))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(WavMono {
        sample_rate_hz: spec.sample_rate,
        frames,
    })
}

pub fn read_wav_mono(path: impl AsRef<Path>) -> anyhow::Result<WavMono> {
    let path = path.as_ref();
    let raw = fs::read(path)
        .with_context(|| format!("error reading {}", path.display()))?;
    parse_wav_mono(&raw)
}
