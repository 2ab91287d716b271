use crate::{FrameError, PixelFormat};

/// Validate biplanar 4:2:0 plane geometry.
///
/// Dimensions must be even and nonzero, strides must cover a full row
/// (luma rows are `width` bytes, interleaved CbCr rows are also `width`
/// bytes), and each plane must hold all of its rows.
pub(crate) fn check_geometry(
    width: usize,
    height: usize,
    luma_stride: usize,
    luma_len: usize,
    chroma_stride: usize,
    chroma_len: usize,
) -> Result<(), FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::Geometry(format!(
            "zero dimension: {}x{}",
            width, height
        )));
    }
    if width % 2 != 0 || height % 2 != 0 {
        return Err(FrameError::Geometry(format!(
            "4:2:0 requires even dimensions, got {}x{}",
            width, height
        )));
    }
    if luma_stride < width {
        return Err(FrameError::Geometry(format!(
            "luma stride {} shorter than row width {}",
            luma_stride, width
        )));
    }
    if chroma_stride < width {
        return Err(FrameError::Geometry(format!(
            "chroma stride {} shorter than row width {}",
            chroma_stride, width
        )));
    }
    if luma_len < luma_stride * height {
        return Err(FrameError::Geometry(format!(
            "luma plane holds {} bytes, needs {}",
            luma_len,
            luma_stride * height
        )));
    }
    if chroma_len < chroma_stride * (height / 2) {
        return Err(FrameError::Geometry(format!(
            "chroma plane holds {} bytes, needs {}",
            chroma_len,
            chroma_stride * (height / 2)
        )));
    }
    Ok(())
}

/// A borrowed view of one decoded frame.
///
/// The planes stay owned by the frame source; a view is only held for the
/// duration of a single slice copy and never retained.
#[derive(Debug, Clone, Copy)]
pub struct PixelFrame<'a> {
    pub width: usize,
    pub height: usize,
    pub format: PixelFormat,
    pub luma: &'a [u8],
    pub luma_stride: usize,
    pub chroma: &'a [u8],
    pub chroma_stride: usize,
    /// Presentation timestamp in seconds, monotonic within a stream.
    pub timestamp: f64,
}

/// An owned frame, for channel delivery and batch collection.
///
/// Capture buffers are typically only valid until the next capture call,
/// so frames are copied to owned memory before crossing threads.
#[derive(Debug, Clone)]
pub struct FrameBuf {
    width: usize,
    height: usize,
    format: PixelFormat,
    luma: Vec<u8>,
    luma_stride: usize,
    chroma: Vec<u8>,
    chroma_stride: usize,
    timestamp: f64,
}

impl FrameBuf {
    /// Take ownership of decoded planes, validating their geometry.
    pub fn new(
        width: usize,
        height: usize,
        format: PixelFormat,
        luma: Vec<u8>,
        luma_stride: usize,
        chroma: Vec<u8>,
        chroma_stride: usize,
        timestamp: f64,
    ) -> Result<Self, FrameError> {
        check_geometry(
            width,
            height,
            luma_stride,
            luma.len(),
            chroma_stride,
            chroma.len(),
        )?;
        Ok(Self {
            width,
            height,
            format,
            luma,
            luma_stride,
            chroma,
            chroma_stride,
            timestamp,
        })
    }

    /// Borrow the planes as a `PixelFrame` for one copy operation.
    pub fn view(&self) -> PixelFrame<'_> {
        PixelFrame {
            width: self.width,
            height: self.height,
            format: self.format,
            luma: &self.luma,
            luma_stride: self.luma_stride,
            chroma: &self.chroma,
            chroma_stride: self.chroma_stride,
            timestamp: self.timestamp,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }
}
