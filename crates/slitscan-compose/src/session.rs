use crate::ComposeError;
use slitscan_frame::{PixelFrame, SliceBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No buffer allocated, not accepting frames.
    Idle,
    /// Buffer may be attached, accepting slice writes.
    Active,
    /// Buffer is full; the image stays available for viewing and saving.
    /// Reached automatically, never by external cancellation.
    Complete,
}

/// Tracks one composite image from first slice to completion.
///
/// Both compositors delegate their slice writes here. Slices land in
/// strictly increasing index order and no destination row is ever written
/// twice; once the next slice can no longer fit, the session completes on
/// its own.
#[derive(Debug)]
pub struct CompositionSession {
    state: SessionState,
    buffer: Option<SliceBuffer>,
    slice_height: usize,
    slice_index: usize,
}

impl CompositionSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            buffer: None,
            slice_height: 0,
            slice_index: 0,
        }
    }

    /// Begin a new composite: reset counters, drop any prior buffer.
    pub fn start(&mut self, slice_height: usize) {
        self.buffer = None;
        self.slice_height = slice_height;
        self.slice_index = 0;
        self.state = SessionState::Active;
    }

    /// Install the output buffer. Live mode attaches lazily from the first
    /// accepted frame's geometry; batch mode attaches eagerly.
    pub fn attach_buffer(&mut self, buffer: SliceBuffer) -> Result<(), ComposeError> {
        if self.state != SessionState::Active {
            return Err(ComposeError::State(
                "cannot attach buffer outside an active session".to_string(),
            ));
        }
        self.buffer = Some(buffer);
        Ok(())
    }

    /// Write the next slice from `frame` and advance.
    ///
    /// If even the current slice no longer fits, nothing is written and the
    /// session completes immediately. Otherwise the slice is copied; when
    /// the slice after it would overflow the buffer, the session completes
    /// having finished the last slice that fits. Partial slices are never
    /// clamped or padded.
    pub fn accept_slice(&mut self, frame: &PixelFrame) -> Result<SessionState, ComposeError> {
        if self.state != SessionState::Active {
            return Err(ComposeError::State(
                "accept_slice outside an active session".to_string(),
            ));
        }
        let buffer = self.buffer.as_mut().ok_or_else(|| {
            ComposeError::State("accept_slice with no buffer attached".to_string())
        })?;

        let height = buffer.height();
        if (self.slice_index + 1) * self.slice_height > height {
            self.state = SessionState::Complete;
            return Ok(self.state);
        }

        buffer.write_slice(frame, self.slice_index, self.slice_height);
        self.slice_index += 1;

        // stop once the next slice cannot fit
        if (self.slice_index + 1) * self.slice_height > height {
            self.state = SessionState::Complete;
        }
        Ok(self.state)
    }

    /// "Retake": back to Idle from any state, discarding the buffer.
    pub fn reset(&mut self) {
        self.buffer = None;
        self.slice_index = 0;
        self.state = SessionState::Idle;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn slice_index(&self) -> usize {
        self.slice_index
    }

    pub fn slice_height(&self) -> usize {
        self.slice_height
    }

    /// Fraction of the image height written so far, 0.0 with no buffer.
    pub fn percent_complete(&self) -> f64 {
        match &self.buffer {
            Some(buffer) => {
                (self.slice_index * self.slice_height) as f64 / buffer.height() as f64
            }
            None => 0.0,
        }
    }

    pub fn buffer(&self) -> Option<&SliceBuffer> {
        self.buffer.as_ref()
    }

    pub fn take_buffer(&mut self) -> Option<SliceBuffer> {
        self.buffer.take()
    }
}

impl Default for CompositionSession {
    fn default() -> Self {
        Self::new()
    }
}
