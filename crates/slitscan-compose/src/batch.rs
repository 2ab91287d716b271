use crate::{ComposeConfig, ComposeError, CompositionSession};
use slitscan_base::Tensor;
use slitscan_frame::{FrameBuf, PixelFormat, SliceBuffer, materialize};

/// Composites a finite, ordered list of sampled frames into one image.
///
/// Slice height is derived from the frame count: `height / N` rows per
/// frame, integer division. When N does not divide the height, the bottom
/// `height mod N` rows are never written and keep their initial bytes.
pub struct BatchCompositor {
    config: ComposeConfig,
}

impl BatchCompositor {
    pub fn new(config: ComposeConfig) -> Self {
        Self { config }
    }

    /// Compose `frames` into a slice buffer.
    ///
    /// Validation is fail-fast: an empty list, a non-NV12 frame, or a
    /// dimension mismatch rejects the whole batch before any copy begins.
    /// With `parallel` configured, slices are copied by scoped worker
    /// threads over disjoint row bands and the call returns only once all
    /// workers finish — no partial result is ever exposed.
    pub fn compose(&self, frames: &[FrameBuf]) -> Result<SliceBuffer, ComposeError> {
        let first = match frames.first() {
            Some(first) => first,
            None => {
                return Err(ComposeError::EmptyInput("insufficient frames".to_string()));
            }
        };
        first
            .format()
            .ensure_format(PixelFormat::Nv12)
            .map_err(|e| ComposeError::Format(e.to_string()))?;
        for (index, frame) in frames.iter().enumerate().skip(1) {
            if frame.format() != first.format()
                || frame.width() != first.width()
                || frame.height() != first.height()
            {
                return Err(ComposeError::Format(format!(
                    "frame {} is {}x{} {:?}, batch is {}x{} {:?}",
                    index,
                    frame.width(),
                    frame.height(),
                    frame.format(),
                    first.width(),
                    first.height(),
                    first.format()
                )));
            }
        }

        let slice_height = first.height() / frames.len();
        if slice_height == 0 {
            return Err(ComposeError::EmptyInput(format!(
                "{} frames for {} rows leaves no rows per slice",
                frames.len(),
                first.height()
            )));
        }

        let mut buffer = SliceBuffer::new(first.width(), first.height(), first.format())
            .map_err(|e| ComposeError::Allocation(e.to_string()))?;

        if self.config.parallel() {
            let regions = buffer.split_slices_mut(slice_height);
            std::thread::scope(|scope| {
                for (mut region, frame) in regions.into_iter().zip(frames) {
                    scope.spawn(move || region.write_from(&frame.view()));
                }
            });
        } else {
            let mut session = CompositionSession::new();
            session.start(slice_height);
            session.attach_buffer(buffer)?;
            for frame in frames {
                session.accept_slice(&frame.view())?;
            }
            buffer = session
                .take_buffer()
                .ok_or_else(|| ComposeError::State("batch session lost its buffer".to_string()))?;
        }

        log::debug!(
            "batch composite: {} frames, {} rows per slice",
            frames.len(),
            slice_height
        );
        Ok(buffer)
    }

    /// Compose and materialize in one step.
    pub fn compose_bitmap(&self, frames: &[FrameBuf]) -> Result<Tensor<u8>, ComposeError> {
        let buffer = self.compose(frames)?;
        materialize(&buffer).map_err(ComposeError::Frame)
    }
}
