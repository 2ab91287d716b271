use slitscan_frame::{FrameBuf, FrameError, PixelFormat, fourcc_to_string};

fn gray_frame(width: usize, height: usize, timestamp: f64) -> Result<FrameBuf, FrameError> {
    FrameBuf::new(
        width,
        height,
        PixelFormat::Nv12,
        vec![0x40; width * height],
        width,
        vec![0x80; width * (height / 2)],
        width,
        timestamp,
    )
}

#[test]
fn test_frame_buf_valid() {
    let frame = gray_frame(4, 4, 1.5).unwrap();
    assert_eq!(frame.width(), 4);
    assert_eq!(frame.height(), 4);
    assert_eq!(frame.format(), PixelFormat::Nv12);
    assert_eq!(frame.timestamp(), 1.5);

    let view = frame.view();
    assert_eq!(view.luma.len(), 16);
    assert_eq!(view.chroma.len(), 8);
    assert_eq!(view.luma_stride, 4);
    assert_eq!(view.timestamp, 1.5);
}

#[test]
fn test_frame_buf_rejects_odd_dimensions() {
    let result = FrameBuf::new(
        3,
        4,
        PixelFormat::Nv12,
        vec![0; 12],
        3,
        vec![0; 6],
        3,
        0.0,
    );
    assert!(matches!(result, Err(FrameError::Geometry(_))));
}

#[test]
fn test_frame_buf_rejects_zero_dimensions() {
    let result = FrameBuf::new(0, 0, PixelFormat::Nv12, vec![], 0, vec![], 0, 0.0);
    assert!(matches!(result, Err(FrameError::Geometry(_))));
}

#[test]
fn test_frame_buf_rejects_short_luma_plane() {
    let result = FrameBuf::new(
        4,
        4,
        PixelFormat::Nv12,
        vec![0; 15],
        4,
        vec![0; 8],
        4,
        0.0,
    );
    assert!(matches!(result, Err(FrameError::Geometry(_))));
}

#[test]
fn test_frame_buf_rejects_stride_shorter_than_row() {
    let result = FrameBuf::new(
        4,
        4,
        PixelFormat::Nv12,
        vec![0; 16],
        2,
        vec![0; 8],
        4,
        0.0,
    );
    assert!(matches!(result, Err(FrameError::Geometry(_))));
}

#[test]
fn test_frame_buf_accepts_padded_strides() {
    // strides wider than the row are normal for capture hardware
    let frame = FrameBuf::new(
        4,
        4,
        PixelFormat::Nv12,
        vec![0; 8 * 4],
        8,
        vec![0; 8 * 2],
        8,
        0.0,
    )
    .unwrap();
    assert_eq!(frame.view().luma_stride, 8);
}

#[test]
fn test_fourcc_round_trip() {
    for format in [PixelFormat::Nv12, PixelFormat::Nv21] {
        assert_eq!(PixelFormat::from_fourcc(format.as_fourcc()).unwrap(), format);
    }
    assert_eq!(fourcc_to_string(PixelFormat::Nv12.as_fourcc()), "NV12");
}

#[test]
fn test_fourcc_unknown_is_error() {
    let result = PixelFormat::from_fourcc(u32::from_le_bytes(*b"YUYV"));
    assert!(matches!(result, Err(FrameError::Format(_))));
}

#[test]
fn test_ensure_format_mismatch() {
    let result = PixelFormat::Nv21.ensure_format(PixelFormat::Nv12);
    assert!(matches!(result, Err(FrameError::Format(_))));
    assert!(PixelFormat::Nv12.ensure_format(PixelFormat::Nv12).is_ok());
}
