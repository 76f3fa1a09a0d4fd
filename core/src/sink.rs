use crate::frame::Frame;

/// Destination for rendered frames, written in order one at a time.
pub trait FrameSink {
    fn write_frame(&mut self, frame: Frame) -> anyhow::Result<()>;

    /// Flush and finalize the output. Sinks that are dropped without being
    /// closed must still release their resources.
    fn close(self) -> anyhow::Result<()>
    where
        Self: Sized;
}

/// Collects frames in memory.
impl FrameSink for Vec<Frame> {
    fn write_frame(&mut self, frame: Frame) -> anyhow::Result<()> {
        self.push(frame);
        Ok(())
    }

    fn close(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl FrameSink for &mut Vec<Frame> {
    fn write_frame(&mut self, frame: Frame) -> anyhow::Result<()> {
        self.push(frame);
        Ok(())
    }

    fn close(self) -> anyhow::Result<()> {
        Ok(())
    }
}
