use crate::{
    ComposeConfig, ComposeError, CompositionSession, FrameSource, Progress, RetakeHandle,
    SessionState,
};
use slitscan_base::Tensor;
use slitscan_frame::{PixelFormat, PixelFrame, SliceBuffer, materialize};

/// What became of one delivered frame. Dropping a frame is normal control
/// flow, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDisposition {
    /// The frame's slice was written at this index.
    Accepted(usize),
    /// Dropped: delivered sooner than the gate interval after the last
    /// accepted frame.
    Gated,
    /// Dropped: the session is not accepting frames.
    Inactive,
    /// Dropped: geometry or format does not match the composite.
    Rejected,
    /// The composite is finished; the session left Active.
    Completed,
}

/// Gates a continuous frame stream down to the capture cadence and feeds
/// each accepted frame to the composition session.
///
/// All frame handling happens on one path (`handle_frame`); observers on
/// other threads read the [`Progress`] handle and request restarts through
/// the [`RetakeHandle`].
pub struct LiveCompositor {
    config: ComposeConfig,
    session: CompositionSession,
    last_accepted: f64,
    progress: Progress,
    retake: RetakeHandle,
}

impl LiveCompositor {
    pub fn new(config: ComposeConfig) -> Self {
        Self {
            config,
            session: CompositionSession::new(),
            last_accepted: f64::NEG_INFINITY,
            progress: Progress::new(),
            retake: RetakeHandle::new(),
        }
    }

    /// Begin accepting frames. Discards any prior composite.
    pub fn start(&mut self) {
        self.session.start(self.config.slice_height());
        self.last_accepted = f64::NEG_INFINITY;
        self.progress.publish(0, 0.0, true);
        self.progress.clear_preview();
    }

    /// Shareable read-only progress view for UI observers.
    pub fn progress(&self) -> Progress {
        self.progress.clone()
    }

    /// Shareable "Retake" control.
    pub fn retake_handle(&self) -> RetakeHandle {
        self.retake.clone()
    }

    /// Handle one delivered frame.
    ///
    /// The first frame since `start()` establishes the composite's geometry
    /// and format and is always accepted; an allocation or format failure
    /// there is fatal to the session. Later frames are dropped when the
    /// session is inactive, when they mismatch the established format
    /// (logged, session stays active), or when they arrive within the gate
    /// interval of the last accepted frame.
    pub fn handle_frame(&mut self, frame: &PixelFrame) -> Result<FrameDisposition, ComposeError> {
        if self.retake.take_requested() {
            self.start();
        }
        if !self.session.is_active() {
            return Ok(FrameDisposition::Inactive);
        }

        match self.session.buffer() {
            None => {
                // First frame: size the composite from it, accept with no
                // rate check.
                if let Err(e) = frame.format.ensure_format(PixelFormat::Nv12) {
                    self.fail();
                    return Err(ComposeError::Format(e.to_string()));
                }
                let buffer = match SliceBuffer::new(frame.width, frame.height, frame.format) {
                    Ok(buffer) => buffer,
                    Err(e) => {
                        self.fail();
                        return Err(ComposeError::Allocation(e.to_string()));
                    }
                };
                self.session.attach_buffer(buffer)?;
            }
            Some(buffer) => {
                if frame.format != buffer.format()
                    || frame.width != buffer.width()
                    || frame.height != buffer.height()
                {
                    log::warn!(
                        "dropping frame: {}x{} {:?} does not match composite {}x{} {:?}",
                        frame.width,
                        frame.height,
                        frame.format,
                        buffer.width(),
                        buffer.height(),
                        buffer.format()
                    );
                    return Ok(FrameDisposition::Rejected);
                }
                if frame.timestamp - self.last_accepted < self.config.gate_secs() {
                    log::debug!("gating frame at t={:.3}", frame.timestamp);
                    return Ok(FrameDisposition::Gated);
                }
            }
        }

        let index = self.session.slice_index();
        let state = self.session.accept_slice(frame)?;
        self.last_accepted = frame.timestamp;

        if self.session.slice_index() > index {
            self.progress.publish(
                self.session.slice_index(),
                self.session.percent_complete(),
                self.session.is_active(),
            );
            self.publish_preview();
        }

        if state == SessionState::Complete {
            Ok(FrameDisposition::Completed)
        } else {
            Ok(FrameDisposition::Accepted(index))
        }
    }

    /// Drive a frame source to completion and materialize the composite.
    ///
    /// Exits when the session completes or the source ends; frames still
    /// delivered after completion are dropped by `handle_frame`.
    pub async fn run<S: FrameSource>(&mut self, source: &mut S) -> Result<Tensor<u8>, ComposeError> {
        self.start();
        while let Some(frame) = source.recv().await? {
            if let FrameDisposition::Completed = self.handle_frame(&frame.view())? {
                break;
            }
        }
        let buffer = self.session.buffer().ok_or_else(|| {
            ComposeError::EmptyInput("stream ended before any frame was accepted".to_string())
        })?;
        materialize(buffer).map_err(ComposeError::Frame)
    }

    /// Materialize the current composite, full or partial.
    pub fn bitmap(&self) -> Result<Tensor<u8>, ComposeError> {
        let buffer = self
            .session
            .buffer()
            .ok_or_else(|| ComposeError::State("no composite allocated".to_string()))?;
        materialize(buffer).map_err(ComposeError::Frame)
    }

    pub fn session(&self) -> &CompositionSession {
        &self.session
    }

    /// Take the finished (or partial) composite out of the session.
    pub fn take_buffer(&mut self) -> Option<SliceBuffer> {
        self.session.take_buffer()
    }

    // Allocation or format failure on the first frame: no partial state
    // stays visible.
    fn fail(&mut self) {
        self.session.reset();
        self.progress.publish(0, 0.0, false);
        self.progress.clear_preview();
    }

    fn publish_preview(&self) {
        if let Some(buffer) = self.session.buffer() {
            match materialize(buffer) {
                Ok(bitmap) => self.progress.publish_preview(bitmap),
                Err(e) => log::warn!("preview materialization failed: {}", e),
            }
        }
    }
}
