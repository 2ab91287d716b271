use slitscan_base::TensorError;
use std::fmt;

#[derive(Debug)]
pub enum FrameError {
    Geometry(String),
    Format(String),
    Encode(String),
    Tensor(TensorError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Geometry(msg) => write!(f, "geometry error: {msg}"),
            FrameError::Format(msg) => write!(f, "format error: {msg}"),
            FrameError::Encode(msg) => write!(f, "encode error: {msg}"),
            FrameError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<TensorError> for FrameError {
    fn from(err: TensorError) -> Self {
        FrameError::Tensor(err)
    }
}

impl From<crates_image::ImageError> for FrameError {
    fn from(err: crates_image::ImageError) -> Self {
        FrameError::Encode(err.to_string())
    }
}
