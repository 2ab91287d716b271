use crate::{ComposeError, FrameSource};
use slitscan_frame::FrameBuf;

/// Uniform subsampler for the batch pipeline: keeps every `stride`-th
/// frame of a decoded stream, counting from one (frames 10, 20, 30, ...
/// with the default stride).
#[derive(Debug)]
pub struct FrameSampler {
    stride: usize,
    seen: usize,
}

impl FrameSampler {
    /// A stride of zero is treated as one (keep everything).
    pub fn new(stride: usize) -> Self {
        Self {
            stride: stride.max(1),
            seen: 0,
        }
    }

    /// Count one decoded frame; true when it should be kept.
    pub fn admit(&mut self) -> bool {
        self.seen += 1;
        self.seen % self.stride == 0
    }

    pub fn seen(&self) -> usize {
        self.seen
    }
}

/// Drain a finite source, keeping every `stride`-th frame.
///
/// A stream of M decoded frames yields floor(M / stride) sampled frames;
/// the batch compositor reports insufficient input if that is zero.
pub async fn collect_sampled<S: FrameSource>(
    source: &mut S,
    stride: usize,
) -> Result<Vec<FrameBuf>, ComposeError> {
    let mut sampler = FrameSampler::new(stride);
    let mut frames = Vec::new();
    while let Some(frame) = source.recv().await? {
        if sampler.admit() {
            frames.push(frame);
        }
    }
    log::debug!(
        "sampled {} of {} decoded frames",
        frames.len(),
        sampler.seen()
    );
    Ok(frames)
}
