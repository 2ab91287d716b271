//! Planar pixel buffers for the slitscan ecosystem.
//!
//! This crate provides the biplanar 4:2:0 frame and composite-buffer types
//! the compositors work on: borrowed frame views, owned frames for channel
//! delivery, the `SliceBuffer` output image with its row-band copier, and
//! materialization of the planar buffer into an RGB `Tensor<u8>` from
//! `slitscan-base`.
//!
//! All bitmaps use HWC layout: `[height, width, channels]`.

pub mod bitmap;
pub mod error;
pub mod frame;
pub mod pixelformat;
pub mod slicebuffer;

pub use bitmap::materialize;
pub use error::FrameError;
pub use frame::{FrameBuf, PixelFrame};
pub use pixelformat::{PixelFormat, fourcc_to_string};
pub use slicebuffer::{SliceBuffer, SliceRegion};

use crates_image::ImageEncoder;
use slitscan_base::Tensor;

fn check_bitmap(bitmap: &Tensor<u8>) -> Result<(u32, u32), FrameError> {
    match bitmap.shape[..] {
        [height, width, 3] => Ok((width as u32, height as u32)),
        _ => Err(FrameError::Encode(format!(
            "expected [height, width, 3] bitmap, got {:?}",
            bitmap.shape
        ))),
    }
}

fn encode_jpeg_inner(bitmap: &Tensor<u8>, quality: u8) -> Result<Vec<u8>, FrameError> {
    let (width, height) = check_bitmap(bitmap)?;
    let mut buffer = Vec::new();
    let encoder = crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder.write_image(
        &bitmap.data,
        width,
        height,
        crates_image::ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

fn encode_png_inner(bitmap: &Tensor<u8>) -> Result<Vec<u8>, FrameError> {
    let (width, height) = check_bitmap(bitmap)?;
    let mut buffer = Vec::new();
    let encoder = crates_image::codecs::png::PngEncoder::new(&mut buffer);
    encoder.write_image(
        &bitmap.data,
        width,
        height,
        crates_image::ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

/// Encode a materialized bitmap as JPEG bytes.
///
/// The `quality` parameter controls JPEG compression (1-100, higher =
/// better quality). The CPU-bound encoding work runs on tokio's blocking
/// thread pool.
///
/// # Errors
///
/// Returns `FrameError::Encode` if the bitmap is not `[height, width, 3]`
/// or encoding fails.
pub async fn encode_jpeg(bitmap: Tensor<u8>, quality: u8) -> Result<Vec<u8>, FrameError> {
    tokio::task::spawn_blocking(move || encode_jpeg_inner(&bitmap, quality))
        .await
        .map_err(|e| FrameError::Encode(e.to_string()))?
}

/// Encode a materialized bitmap as PNG bytes.
///
/// The CPU-bound encoding work runs on tokio's blocking thread pool.
///
/// # Errors
///
/// Returns `FrameError::Encode` if the bitmap is not `[height, width, 3]`
/// or encoding fails.
pub async fn encode_png(bitmap: Tensor<u8>) -> Result<Vec<u8>, FrameError> {
    tokio::task::spawn_blocking(move || encode_png_inner(&bitmap))
        .await
        .map_err(|e| FrameError::Encode(e.to_string()))?
}
