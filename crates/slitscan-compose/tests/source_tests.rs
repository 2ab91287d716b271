use slitscan_compose::{
    BatchCompositor, ChannelSource, ComposeConfig, ComposeError, FrameSource, LiveCompositor,
    collect_sampled,
};
use slitscan_frame::{FrameBuf, PixelFormat};

fn frame_at(luma: u8, timestamp: f64) -> FrameBuf {
    FrameBuf::new(
        4,
        100,
        PixelFormat::Nv12,
        vec![luma; 4 * 100],
        4,
        vec![0x80; 4 * 50],
        4,
        timestamp,
    )
    .unwrap()
}

// Finite source handing out pre-built frames.
struct ListSource {
    frames: Vec<FrameBuf>,
    next: usize,
}

impl ListSource {
    fn new(frames: Vec<FrameBuf>) -> Self {
        Self { frames, next: 0 }
    }
}

impl FrameSource for ListSource {
    async fn recv(&mut self) -> Result<Option<FrameBuf>, ComposeError> {
        let frame = self.frames.get(self.next).cloned();
        self.next += 1;
        Ok(frame)
    }
}

#[tokio::test]
async fn test_live_run_to_completion() {
    // 12 frames 0.1s apart; 100 rows / 10-row slices completes at frame 10
    let frames: Vec<FrameBuf> = (0..12).map(|n| frame_at(0x80, n as f64 * 0.1)).collect();
    let mut source = ListSource::new(frames);

    let mut live = LiveCompositor::new(ComposeConfig::default());
    let bitmap = live.run(&mut source).await.unwrap();
    assert_eq!(bitmap.shape, vec![100, 4, 3]);
    assert_eq!(live.session().slice_index(), 10);
    assert!(bitmap.data.iter().all(|&b| b == 0x80));
}

#[tokio::test]
async fn test_live_run_partial_stream() {
    // stream ends after 3 accepted frames: partial composite materializes
    let frames: Vec<FrameBuf> = (0..3).map(|n| frame_at(0xFF, n as f64 * 0.1)).collect();
    let mut source = ListSource::new(frames);

    let mut live = LiveCompositor::new(ComposeConfig::default());
    let bitmap = live.run(&mut source).await.unwrap();
    // rows 0..30 white, rest black
    assert_eq!(bitmap.data[0], 0xFF);
    assert_eq!(bitmap.data[(30 * 4) * 3], 0x00);
}

#[tokio::test]
async fn test_live_run_empty_stream_fails() {
    let mut source = ListSource::new(vec![]);
    let mut live = LiveCompositor::new(ComposeConfig::default());
    let result = live.run(&mut source).await;
    assert!(matches!(result, Err(ComposeError::EmptyInput(_))));
}

#[tokio::test]
async fn test_channel_source_ends_when_senders_drop() {
    let (sender, mut source) = ChannelSource::with_capacity(8);
    for n in 0..3 {
        sender.send(frame_at(n, n as f64)).await.unwrap();
    }
    drop(sender);

    let mut received = 0;
    while let Some(_frame) = source.recv().await.unwrap() {
        received += 1;
    }
    assert_eq!(received, 3);
}

#[tokio::test]
async fn test_collect_sampled_keeps_every_tenth() {
    let frames: Vec<FrameBuf> = (0..35).map(|n| frame_at(n, n as f64 / 30.0)).collect();
    let mut source = ListSource::new(frames);

    let sampled = collect_sampled(&mut source, 10).await.unwrap();
    assert_eq!(sampled.len(), 3);
    // frames 10, 20, 30 of the stream (1-based), i.e. luma 9, 19, 29
    let luma: Vec<u8> = sampled.iter().map(|f| f.view().luma[0]).collect();
    assert_eq!(luma, vec![9, 19, 29]);
}

#[tokio::test]
async fn test_sampled_stream_feeds_batch() {
    let frames: Vec<FrameBuf> = (0..50).map(|n| frame_at(n, n as f64 / 30.0)).collect();
    let mut source = ListSource::new(frames);

    let sampled = collect_sampled(&mut source, 10).await.unwrap();
    let buffer = BatchCompositor::new(ComposeConfig::default())
        .compose(&sampled)
        .unwrap();
    // 5 sampled frames over 100 rows: 20-row bands from frames 10, 20, ...
    for (band, expected) in [(0usize, 9u8), (20, 19), (40, 29), (60, 39), (80, 49)] {
        assert_eq!(buffer.luma()[band * 4], expected, "band at row {band}");
    }
}
