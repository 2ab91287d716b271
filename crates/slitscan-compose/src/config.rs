/// Configuration for the live and batch compositors.
///
/// Live capture reads `gate_secs` and `slice_height`; batch composition
/// reads `sample_stride` and `parallel`. Explicit configuration keeps the
/// compositors deterministic under test instead of relying on hard-coded
/// constants.
#[derive(Clone, Debug)]
pub struct ComposeConfig {
    gate_secs: f64,
    slice_height: usize,
    sample_stride: usize,
    parallel: bool,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            gate_secs: 0.05,
            slice_height: 10,
            sample_stride: 10,
            parallel: false,
        }
    }
}

impl ComposeConfig {
    /// Set the minimum elapsed time between two accepted live frames.
    pub fn with_gate_secs(mut self, gate_secs: f64) -> Self {
        self.gate_secs = gate_secs;
        self
    }

    /// Set the number of luma rows per live slice.
    pub fn with_slice_height(mut self, slice_height: usize) -> Self {
        self.slice_height = slice_height;
        self
    }

    /// Set the batch sampling stride (keep every n-th decoded frame).
    pub fn with_sample_stride(mut self, sample_stride: usize) -> Self {
        self.sample_stride = sample_stride;
        self
    }

    /// Enable parallel slice copies in batch composition.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // Getters
    pub fn gate_secs(&self) -> f64 {
        self.gate_secs
    }

    pub fn slice_height(&self) -> usize {
        self.slice_height
    }

    pub fn sample_stride(&self) -> usize {
        self.sample_stride
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}
