//! Sobel filter core: gradient kernel, row partitioning, thread sizing and
//! the fork-join dispatcher.
//!
//! The module is split into:
//! - **Kernel**: the 3×3 Sobel magnitude for one pixel and for a row range
//! - **Partition**: pure row-range arithmetic (unit testable)
//! - **Threads**: [`ThreadPolicy`] heuristics and the [`Parallelism`] capability
//! - **Dispatch**: [`run_parallel`], one scoped worker per row range
//!
//! Nothing here knows about file formats; see [`crate::imaging`] for that.

mod dispatch;
mod kernel;
mod partition;
mod threads;

pub use dispatch::run_parallel;
pub use kernel::{GX, GY, apply_rows, gradient_at};
pub use partition::{RowRange, partition_rows};
pub use threads::{
    DEFAULT_PIXELS_PER_THREAD, FixedParallelism, HostParallelism, Parallelism, ThreadPolicy,
    decide_thread_count,
};

use thiserror::Error;

/// Empty `Vec` with room for `len` items, or [`FilterError::Allocation`].
///
/// Per-worker bookkeeping scales with a user-supplied thread count.
pub(crate) fn try_vec_with_capacity<T>(len: usize) -> Result<Vec<T>, FilterError> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(len)
        .map_err(|_| FilterError::Allocation {
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    Ok(items)
}

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("thread count must be a positive integer, got {0}")]
    InvalidThreadCount(usize),
    #[error("pixel buffer of {len} bytes does not match {width}x{height}")]
    BufferSize {
        width: usize,
        height: usize,
        len: usize,
    },
    #[error("image dimensions {width}x{height} overflow the address space")]
    DimensionOverflow { width: usize, height: usize },
    #[error("row range {start}..{end} ({len} output bytes) does not fit {width}x{height}")]
    RowRange {
        start: usize,
        end: usize,
        len: usize,
        width: usize,
        height: usize,
    },
    #[error("failed to allocate {bytes} bytes for the sobel pass")]
    Allocation { bytes: usize },
    #[error("failed to spawn worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),
    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}

impl FilterError {
    /// Caller misuse of the thread-count setting.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidThreadCount(_))
    }

    /// The host could not provide memory or threads for the pass.
    pub fn is_resource(&self) -> bool {
        matches!(
            self,
            Self::Allocation { .. } | Self::WorkerSpawn(_) | Self::WorkerPanicked { .. }
        )
    }
}
