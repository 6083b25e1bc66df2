//! # spmv-model: performance models for streaming SpMV accelerators
//!
//! Estimates the clock-cycle cost and hardware-resource usage of
//! streaming sparse-matrix/dense-vector multiply (SpMV) accelerators
//! before they are built, so many candidate configurations can be
//! compared cheaply.
//!
//! ## Model pipeline
//!
//! 1. **Partitioning**: the matrix is split by columns into one
//!    contiguous range per parallel pipe.
//!
//! 2. **Blocking**: each partition's rows are grouped into blocks whose
//!    non-zero working set fits the pipe's local store.
//!
//! 3. **Cycle simulation**: a pluggable timing policy
//!    ([`CyclePolicy`]: `Simple`, `Fst`, `SkipEmptyRows`) charges clock
//!    cycles for streaming each block through a fixed-width datapath.
//!
//! 4. **Aggregation**: per-architecture metrics (estimated cycles,
//!    GFlops, BRAM usage) are collected on a [`ModelEstimate`]; the
//!    slowest pipe governs the latency estimate.
//!
//! [`ArchSpace`] enumerates `(cacheSize, inputWidth, numPipes)`
//! combinations for design-space exploration, and [`sweep_parallel`]
//! evaluates a whole space across CPU cores.
//!
//! ## Usage
//!
//! ```
//! use spmv_model::{CyclePolicy, SparseMatrixCSR, SpmvArchitecture};
//!
//! // 4x4 matrix with two non-zeros per row
//! let mat = SparseMatrixCSR::new(
//!     4, 4,
//!     vec![0, 2, 4, 6, 8],
//!     vec![0, 1, 1, 2, 2, 3, 0, 3],
//!     vec![1.0; 8],
//! );
//!
//! let arch = SpmvArchitecture::new(8, 2, 1, CyclePolicy::Simple)?;
//! let estimate = arch.preprocess(&mat)?;
//! assert_eq!(estimate.estimated_clock_cycles(), 4);
//! # Ok::<(), spmv_model::ModelError>(())
//! ```

pub mod constants;
pub mod matrix;
pub mod model;
pub mod utils;
pub mod workload;

// Re-export primary components
pub use matrix::SparseMatrixCSR;
pub use model::{
    best_by_cycles, sweep, sweep_parallel, ArchConfig, ArchSpace, BlockingResult, CyclePolicy,
    ModelError, ModelEstimate, ResourceUsage, SpmvArchitecture, SweepPoint,
};
pub use utils::{from_sprs_csr, to_sprs_csr, Range};
pub use workload::{MatrixGenerator, PatternMatrixGenerator};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
