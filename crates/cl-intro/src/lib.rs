// ─── Feature-Module ───────────────────────────────────────────────────
#[cfg(feature = "metrics")]
mod metrics;
#[cfg(feature = "metrics")]
pub use metrics::{record, summary, ALLOCS, ALLOC_BYTES};

#[cfg(feature = "memtrace")]
mod memtracer;
#[cfg(feature = "memtrace")]
pub use memtracer::{flush_csv, start, CopyToken, Dir};

// ─── Kern-Module ──────────────────────────────────────────────────────
mod buffer;
mod host;
mod launch;
mod setup;

pub use buffer::{GpuBuffer, GpuEventGuard, InFlight, Queued, Ready, State};
pub use host::{init_input, verify};
pub use launch::{VecAdd, KERNEL_NAME, KERNEL_SRC};
pub use setup::ClSetup;

// ─── Fehler-Typ ───────────────────────────────────────────────────────
#[derive(thiserror::Error, Debug)]
pub enum ClError {
    #[error("OpenCL API error: {0}")]
    Api(i32),
    #[error("no OpenCL platform found")]
    NoPlatform,
    #[error("no OpenCL compatible GPU or CPU device available")]
    NoDevice,
    #[error("kernel build failed:\n{0}")]
    Build(String),
    #[error("invalid buffer length: {0}")]
    InvalidLen(usize),
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    LenMismatch { expected: usize, actual: usize },
    #[error("verification failed at index {index}: got {got}, expected {expected}")]
    Verify { index: usize, got: f32, expected: f32 },
}

impl From<opencl3::error_codes::ClError> for ClError {
    fn from(err: opencl3::error_codes::ClError) -> Self {
        ClError::Api(err.0)
    }
}

impl From<i32> for ClError {
    fn from(code: i32) -> Self {
        ClError::Api(code)
    }
}
