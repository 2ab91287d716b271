use slitscan_frame::FrameError;
use std::fmt;

#[derive(Debug)]
pub enum ComposeError {
    Allocation(String),
    Format(String),
    EmptyInput(String),
    State(String),
    Frame(FrameError),
    Channel(String),
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::Allocation(msg) => write!(f, "allocation error: {msg}"),
            ComposeError::Format(msg) => write!(f, "format error: {msg}"),
            ComposeError::EmptyInput(msg) => write!(f, "empty input: {msg}"),
            ComposeError::State(msg) => write!(f, "session state error: {msg}"),
            ComposeError::Frame(err) => write!(f, "frame error: {err}"),
            ComposeError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for ComposeError {}

impl From<FrameError> for ComposeError {
    fn from(err: FrameError) -> Self {
        ComposeError::Frame(err)
    }
}
