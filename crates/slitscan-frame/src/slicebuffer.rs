use crate::frame::check_geometry;
use crate::{FrameError, PixelFormat, PixelFrame};

// Unwritten chroma bytes stay neutral so undrawn rows render black.
const CHROMA_NEUTRAL: u8 = 0x80;

/// Copy `rows` rows from `src` into `dst`, `min(src_stride, dst_stride)`
/// bytes each. A narrower destination row silently truncates; it is a
/// policy, not an error.
fn copy_rows(dst: &mut [u8], dst_stride: usize, src: &[u8], src_stride: usize, rows: usize) {
    let bytes = src_stride.min(dst_stride);
    for row in 0..rows {
        let d = row * dst_stride;
        let s = row * src_stride;
        dst[d..d + bytes].copy_from_slice(&src[s..s + bytes]);
    }
}

/// The composite image under construction.
///
/// Owns both planes of a biplanar 4:2:0 image and accepts slice writes at
/// strictly increasing row bands. Source and destination strides are
/// independent and respected per plane.
#[derive(Debug, Clone)]
pub struct SliceBuffer {
    width: usize,
    height: usize,
    format: PixelFormat,
    luma: Vec<u8>,
    luma_stride: usize,
    chroma: Vec<u8>,
    chroma_stride: usize,
}

impl SliceBuffer {
    /// Allocate a buffer with natural strides (one row = `width` bytes).
    ///
    /// Planes are initialized to black (luma 0x00, chroma 0x80) so rows the
    /// compositors never write render as black instead of garbage.
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Result<Self, FrameError> {
        Self::with_strides(width, height, format, width, width)
    }

    /// Allocate a buffer with explicit per-plane strides.
    pub fn with_strides(
        width: usize,
        height: usize,
        format: PixelFormat,
        luma_stride: usize,
        chroma_stride: usize,
    ) -> Result<Self, FrameError> {
        format.ensure_format(PixelFormat::Nv12)?;
        let luma_len = luma_stride
            .checked_mul(height)
            .ok_or_else(|| FrameError::Geometry("luma plane size overflow".to_string()))?;
        let chroma_len = chroma_stride
            .checked_mul(height / 2)
            .ok_or_else(|| FrameError::Geometry("chroma plane size overflow".to_string()))?;
        check_geometry(width, height, luma_stride, luma_len, chroma_stride, chroma_len)?;
        Ok(Self {
            width,
            height,
            format,
            luma: vec![0u8; luma_len],
            luma_stride,
            chroma: vec![CHROMA_NEUTRAL; chroma_len],
            chroma_stride,
        })
    }

    /// Write one slice from `src` into the band starting at luma row
    /// `index * slice_height` (chroma row `index * slice_height / 2`).
    ///
    /// The caller guarantees `(index + 1) * slice_height <= height` and that
    /// `src` covers the same rows; the composition session enforces this
    /// before delegating here.
    pub fn write_slice(&mut self, src: &PixelFrame, index: usize, slice_height: usize) {
        let luma_rows = slice_height;
        let chroma_rows = slice_height / 2;

        let dst = index * luma_rows * self.luma_stride;
        let from = index * luma_rows * src.luma_stride;
        copy_rows(
            &mut self.luma[dst..],
            self.luma_stride,
            &src.luma[from..],
            src.luma_stride,
            luma_rows,
        );

        let dst = index * chroma_rows * self.chroma_stride;
        let from = index * chroma_rows * src.chroma_stride;
        copy_rows(
            &mut self.chroma[dst..],
            self.chroma_stride,
            &src.chroma[from..],
            src.chroma_stride,
            chroma_rows,
        );
    }

    /// Split the buffer into disjoint per-slice regions for parallel
    /// writes. Returns `height / slice_height` regions; remainder rows at
    /// the bottom belong to no region and keep their initial bytes.
    pub fn split_slices_mut(&mut self, slice_height: usize) -> Vec<SliceRegion<'_>> {
        let count = self.height / slice_height;
        let luma_stride = self.luma_stride;
        let chroma_stride = self.chroma_stride;
        self.luma
            .chunks_exact_mut(slice_height * luma_stride)
            .zip(self.chroma.chunks_exact_mut((slice_height / 2) * chroma_stride))
            .take(count)
            .enumerate()
            .map(|(index, (luma, chroma))| SliceRegion {
                index,
                luma,
                luma_stride,
                chroma,
                chroma_stride,
            })
            .collect()
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

    pub fn luma(&self) -> &[u8] {
        &self.luma
    }

    pub fn luma_stride(&self) -> usize {
        self.luma_stride
    }

    pub fn chroma(&self) -> &[u8] {
        &self.chroma
    }

    pub fn chroma_stride(&self) -> usize {
        self.chroma_stride
    }
}

/// One writable row band of a `SliceBuffer`, disjoint from every other
/// region, so regions can be filled from worker threads without locking.
#[derive(Debug)]
pub struct SliceRegion<'a> {
    index: usize,
    luma: &'a mut [u8],
    luma_stride: usize,
    chroma: &'a mut [u8],
    chroma_stride: usize,
}

impl SliceRegion<'_> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Copy this region's row band from the matching rows of `src`.
    pub fn write_from(&mut self, src: &PixelFrame) {
        let luma_rows = self.luma.len() / self.luma_stride;
        let from = self.index * luma_rows * src.luma_stride;
        copy_rows(
            self.luma,
            self.luma_stride,
            &src.luma[from..],
            src.luma_stride,
            luma_rows,
        );

        let chroma_rows = self.chroma.len() / self.chroma_stride;
        let from = self.index * chroma_rows * src.chroma_stride;
        copy_rows(
            self.chroma,
            self.chroma_stride,
            &src.chroma[from..],
            src.chroma_stride,
            chroma_rows,
        );
    }
}
