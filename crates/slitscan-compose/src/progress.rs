use slitscan_base::Tensor;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
};

struct ProgressInner {
    slice_index: AtomicUsize,
    percent_bits: AtomicU64,
    active: AtomicBool,
    preview: Mutex<Option<Tensor<u8>>>,
}

/// Read-only progress view shared between the frame-handling worker and
/// observers on other threads.
///
/// The worker publishes after every accepted slice; observers read the
/// fields and the latest (possibly partial) preview bitmap. There is no
/// mutation path back into the compositor through this handle.
#[derive(Clone)]
pub struct Progress {
    inner: Arc<ProgressInner>,
}

impl Progress {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(ProgressInner {
                slice_index: AtomicUsize::new(0),
                percent_bits: AtomicU64::new(0.0f64.to_bits()),
                active: AtomicBool::new(false),
                preview: Mutex::new(None),
            }),
        }
    }

    /// Index of the next slice to be written.
    pub fn slice_index(&self) -> usize {
        self.inner.slice_index.load(Ordering::Relaxed)
    }

    /// Fraction of the image height written so far, in [0, 1].
    pub fn percent_complete(&self) -> f64 {
        f64::from_bits(self.inner.percent_bits.load(Ordering::Relaxed))
    }

    pub fn is_active(&self) -> bool {
        self.inner.active.load(Ordering::Relaxed)
    }

    /// Latest materialized preview, if one has been published.
    pub fn preview(&self) -> Option<Tensor<u8>> {
        self.inner
            .preview
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub(crate) fn publish(&self, slice_index: usize, percent: f64, active: bool) {
        self.inner.slice_index.store(slice_index, Ordering::Relaxed);
        self.inner
            .percent_bits
            .store(percent.to_bits(), Ordering::Relaxed);
        self.inner.active.store(active, Ordering::Relaxed);
    }

    pub(crate) fn publish_preview(&self, bitmap: Tensor<u8>) {
        self.inner
            .preview
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(bitmap);
    }

    pub(crate) fn clear_preview(&self) {
        self.inner
            .preview
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
    }
}

/// Clonable "Retake" control: any thread may request a restart; the
/// frame-handling path observes it at the next delivered frame, so an
/// in-flight copy is never torn.
#[derive(Clone)]
pub struct RetakeHandle {
    flag: Arc<AtomicBool>,
}

impl RetakeHandle {
    pub(crate) fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn request(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub(crate) fn take_requested(&self) -> bool {
        self.flag.swap(false, Ordering::Relaxed)
    }
}
