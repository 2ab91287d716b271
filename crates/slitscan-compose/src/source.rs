use crate::ComposeError;
use slitscan_frame::FrameBuf;
use tokio::sync::mpsc;

// capacity of the default frame delivery channel
pub const CHANNEL_CAPACITY: usize = 4;

/// Async source of owned frames.
///
/// `Ok(None)` marks the end of a finite stream (a decoded video); live
/// camera sources simply never return it. Implementations deliver frames
/// one at a time, already serialized — the compositors consume from a
/// single place and never overlap two copies.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    /// Receive the next frame, or `None` at end of stream.
    async fn recv(&mut self) -> Result<Option<FrameBuf>, ComposeError>;
}

/// The explicit single-consumer frame queue between a capture worker and
/// a compositor.
///
/// The producer side holds the `Sender` and pushes owned frames; dropping
/// every sender ends the stream. A bounded channel keeps a slow compositor
/// from buffering unbounded frames.
pub struct ChannelSource {
    receiver: mpsc::Receiver<FrameBuf>,
}

impl ChannelSource {
    /// Create a queue with the default capacity.
    pub fn new() -> (mpsc::Sender<FrameBuf>, Self) {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> (mpsc::Sender<FrameBuf>, Self) {
        let (sender, receiver) = mpsc::channel(capacity);
        (sender, Self { receiver })
    }
}

impl FrameSource for ChannelSource {
    async fn recv(&mut self) -> Result<Option<FrameBuf>, ComposeError> {
        Ok(self.receiver.recv().await)
    }
}
