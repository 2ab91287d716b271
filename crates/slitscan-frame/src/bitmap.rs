use crate::frame::check_geometry;
use crate::pixelformat::yuv_to_rgb;
use crate::{FrameError, SliceBuffer};
use slitscan_base::Tensor;

/// Convert a composite buffer (full or partial) into a displayable RGB
/// bitmap, HWC `[height, width, 3]`.
///
/// Pure function of the buffer bytes: the same buffer materializes to a
/// byte-identical bitmap every time. Callable mid-composition for live
/// progress previews.
///
/// # Errors
///
/// Returns `FrameError::Geometry` if the plane geometry is malformed; the
/// buffer itself is left untouched and can be materialized again later.
pub fn materialize(buffer: &SliceBuffer) -> Result<Tensor<u8>, FrameError> {
    let width = buffer.width();
    let height = buffer.height();
    check_geometry(
        width,
        height,
        buffer.luma_stride(),
        buffer.luma().len(),
        buffer.chroma_stride(),
        buffer.chroma().len(),
    )?;

    let luma = buffer.luma();
    let chroma = buffer.chroma();
    let mut rgb = Vec::with_capacity(width * height * 3);

    for row in 0..height {
        let y_row = row * buffer.luma_stride();
        let c_row = (row / 2) * buffer.chroma_stride();
        for col in 0..width {
            let y = luma[y_row + col];
            let c = c_row + (col / 2) * 2;
            let (r, g, b) = yuv_to_rgb(y, chroma[c], chroma[c + 1]);
            rgb.extend_from_slice(&[r, g, b]);
        }
    }

    Ok(Tensor::new(vec![height, width, 3], rgb)?)
}
