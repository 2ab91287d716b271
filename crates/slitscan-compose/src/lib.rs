//! Slit-scan composition for the slitscan ecosystem.
//!
//! Two driving modes share one compositing contract: the live compositor
//! gates a continuous camera stream down to a capture cadence and writes a
//! fixed-height slice per accepted frame; the batch compositor spreads a
//! finite list of sampled video frames over the full image height. Both
//! delegate their writes to a [`CompositionSession`] over a
//! `slitscan-frame` buffer.

pub mod batch;
pub mod config;
pub mod error;
pub mod live;
pub mod progress;
pub mod sample;
pub mod session;
pub mod source;

pub use batch::BatchCompositor;
pub use config::ComposeConfig;
pub use error::ComposeError;
pub use live::{FrameDisposition, LiveCompositor};
pub use progress::{Progress, RetakeHandle};
pub use sample::{FrameSampler, collect_sampled};
pub use session::{CompositionSession, SessionState};
pub use source::{CHANNEL_CAPACITY, ChannelSource, FrameSource};
