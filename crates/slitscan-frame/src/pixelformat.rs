use crate::FrameError;

// fourcc codes
pub(crate) const FOURCC_NV12: u32 = u32::from_le_bytes(*b"NV12");
pub(crate) const FOURCC_NV21: u32 = u32::from_le_bytes(*b"NV21");

/// Convert a fourcc code to a readable 4-character string.
pub fn fourcc_to_string(fourcc: u32) -> String {
    String::from_utf8_lossy(&fourcc.to_le_bytes()).into_owned()
}

/// Pixel layout tag for frames and composite buffers.
///
/// Both variants are biplanar 4:2:0: a full-resolution luma plane plus a
/// half-width, half-height interleaved chroma plane. `Nv12` orders chroma
/// CbCr, `Nv21` CrCb. The compositors work on `Nv12`; `Nv21` exists so
/// sources delivering it are rejected by tag instead of producing swapped
/// colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Nv12,
    Nv21,
}

impl PixelFormat {
    pub fn from_fourcc(fourcc: u32) -> Result<Self, FrameError> {
        match fourcc {
            FOURCC_NV12 => Ok(PixelFormat::Nv12),
            FOURCC_NV21 => Ok(PixelFormat::Nv21),
            _ => Err(FrameError::Format(format!(
                "unsupported pixel format: {}",
                fourcc_to_string(fourcc)
            ))),
        }
    }

    pub fn as_fourcc(&self) -> u32 {
        match self {
            PixelFormat::Nv12 => FOURCC_NV12,
            PixelFormat::Nv21 => FOURCC_NV21,
        }
    }

    pub fn ensure_format(&self, expected: PixelFormat) -> Result<(), FrameError> {
        if *self != expected {
            return Err(FrameError::Format(format!(
                "expected {:?} format, got {:?}",
                expected, self
            )));
        }
        Ok(())
    }
}

// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8)
pub(crate) fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    (r, g, b)
}
