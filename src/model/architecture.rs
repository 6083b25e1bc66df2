//! Architecture model: partition, block, simulate, aggregate
//!
//! [`SpmvArchitecture`] wires a configuration to a cycle policy;
//! [`SpmvArchitecture::preprocess`] runs the whole pipeline over a matrix
//! and returns an immutable [`ModelEstimate`] carrying every metric. All
//! queries live on the estimate, so there is no way to read cycle or
//! resource numbers that a preprocessing pass has not produced.

use crate::constants::{
    DEFAULT_CACHE_SIZE, DEFAULT_INPUT_WIDTH, DEFAULT_NUM_PIPES, NOMINAL_CLOCK_HZ,
};
use crate::matrix::SparseMatrixCSR;
use crate::model::blocking::{block_partition, BlockingResult};
use crate::model::config::{ArchConfig, ResourceUsage};
use crate::model::cycles::CyclePolicy;
use crate::model::partition::{column_ranges, partition_columns};
use crate::model::ModelError;
use std::fmt;
use std::ops::Range;

/// A parameterised streaming SpMV architecture: one configuration plus
/// one cycle policy. Policies share all partitioning, blocking and
/// aggregation code and differ only in cycle accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpmvArchitecture {
    config: ArchConfig,
    policy: CyclePolicy,
}

impl SpmvArchitecture {
    /// Builds an architecture, validating the configuration.
    pub fn new(
        cache_size: usize,
        input_width: usize,
        num_pipes: usize,
        policy: CyclePolicy,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            config: ArchConfig::new(cache_size, input_width, num_pipes)?,
            policy,
        })
    }

    /// Builds an architecture from an already-validated configuration.
    pub fn from_config(config: ArchConfig, policy: CyclePolicy) -> Self {
        Self { config, policy }
    }

    /// The default single-point configuration for a policy.
    pub fn with_defaults(policy: CyclePolicy) -> Self {
        Self {
            config: ArchConfig {
                cache_size: DEFAULT_CACHE_SIZE,
                input_width: DEFAULT_INPUT_WIDTH,
                num_pipes: DEFAULT_NUM_PIPES,
            },
            policy,
        }
    }

    pub fn config(&self) -> ArchConfig {
        self.config
    }

    pub fn policy(&self) -> CyclePolicy {
        self.policy
    }

    pub fn name(&self) -> &'static str {
        self.policy.name()
    }

    /// Partitions the matrix across pipes, blocks every partition against
    /// the cache, and scores each block with the architecture's policy.
    ///
    /// Each call evaluates from scratch; repeated calls on the same
    /// matrix produce equal estimates. Config fields are public, so the
    /// configuration is re-validated here.
    pub fn preprocess(&self, mat: &SparseMatrixCSR<f64>) -> Result<ModelEstimate, ModelError> {
        self.config.validate()?;

        let ranges = column_ranges(mat.n_cols, self.config.num_pipes)?;
        let parts = partition_columns(mat, self.config.num_pipes)?;

        let partitions = ranges
            .into_iter()
            .zip(&parts)
            .map(|(cols, part)| PartitionEstimate {
                cols,
                blocks: block_partition(part, &self.config, self.policy),
            })
            .collect();

        Ok(ModelEstimate {
            name: self.name(),
            config: self.config,
            nnz: mat.nnz(),
            partitions,
        })
    }
}

/// One pipe's share of the matrix: its column range and the blocking
/// results of every cache-sized block inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionEstimate {
    /// Column range `[lo, hi)` assigned to the pipe
    pub cols: Range<usize>,
    pub blocks: Vec<BlockingResult>,
}

/// The immutable outcome of preprocessing one matrix for one
/// architecture. All metric queries live here.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEstimate {
    name: &'static str,
    config: ArchConfig,
    nnz: usize,
    partitions: Vec<PartitionEstimate>,
}

impl ModelEstimate {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn config(&self) -> ArchConfig {
        self.config
    }

    pub fn partitions(&self) -> &[PartitionEstimate] {
        &self.partitions
    }

    /// Iterates over every blocking result of every partition.
    pub fn blocks(&self) -> impl Iterator<Item = &BlockingResult> {
        self.partitions.iter().flat_map(|p| p.blocks.iter())
    }

    /// Estimated latency: the maximum block cycle count across all pipes.
    /// Throughput is bounded by the slowest pipe, not the average.
    pub fn estimated_clock_cycles(&self) -> u64 {
        self.blocks().map(|b| b.total_cycles).max().unwrap_or(0)
    }

    /// Total floating-point work in GFlop: each non-zero contributes one
    /// multiply and one add.
    pub fn gflops_count(&self) -> f64 {
        2.0 * self.nnz as f64 / 1e9
    }

    /// Sustained GFlops at the nominal accelerator clock.
    pub fn estimated_gflops(&self) -> f64 {
        self.estimated_gflops_at(NOMINAL_CLOCK_HZ)
    }

    /// Sustained GFlops at an arbitrary clock frequency.
    pub fn estimated_gflops_at(&self, clock_hz: f64) -> f64 {
        let cycles = self.estimated_clock_cycles();
        if cycles == 0 {
            return 0.0;
        }
        self.gflops_count() * clock_hz / cycles as f64
    }

    /// On-chip memory cost of the evaluated configuration.
    pub fn resource_usage(&self) -> ResourceUsage {
        self.config.resource_usage()
    }
}

impl fmt::Display for ModelEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cacheSize = {} inputWidth = {} numPipes = {} est. cycles = {} est. gflops = {}",
            self.name,
            self.config.cache_size,
            self.config.input_width,
            self.config.num_pipes,
            self.estimated_clock_cycles(),
            self.estimated_gflops(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(n: usize, nnz_per_row: usize) -> SparseMatrixCSR<f64> {
        let n_cols = n.max(nnz_per_row);
        let mut row_ptr = vec![0];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        for i in 0..n {
            for j in 0..nnz_per_row {
                col_idx.push(j);
                values.push((i + j) as f64 + 1.0);
            }
            row_ptr.push(col_idx.len());
        }
        SparseMatrixCSR::new(n, n_cols, row_ptr, col_idx, values)
    }

    #[test]
    fn test_end_to_end_reference_scenario() {
        // 4x4, 2 non-zeros per row, one pipe, cache of 8, width 2:
        // one partition, one block, 4 cycles
        let mat = uniform(4, 2);
        let arch = SpmvArchitecture::new(8, 2, 1, CyclePolicy::Simple).unwrap();
        let est = arch.preprocess(&mat).unwrap();

        assert_eq!(est.partitions().len(), 1);
        assert_eq!(est.partitions()[0].blocks.len(), 1);
        assert_eq!(est.estimated_clock_cycles(), 4);
    }

    #[test]
    fn test_gflops_count_formula() {
        let mat = uniform(8, 3);
        let arch = SpmvArchitecture::with_defaults(CyclePolicy::Simple);
        let est = arch.preprocess(&mat).unwrap();

        assert_eq!(est.gflops_count(), 2.0 * 24.0 / 1e9);
    }

    #[test]
    fn test_slowest_pipe_governs() {
        // All non-zeros in the first four columns: pipe 0 does all the work
        let n = 8;
        let mut col_idx = Vec::new();
        for _ in 0..n {
            col_idx.extend(0..4);
        }
        let mat = SparseMatrixCSR::new(
            n,
            n,
            (0..=n).map(|i| i * 4).collect(),
            col_idx,
            vec![1.0; n * 4],
        );
        let arch = SpmvArchitecture::new(16, 2, 2, CyclePolicy::Simple).unwrap();
        let est = arch.preprocess(&mat).unwrap();

        let per_pipe: Vec<u64> = est
            .partitions()
            .iter()
            .map(|p| p.blocks.iter().map(|b| b.total_cycles).sum())
            .collect();
        assert!(per_pipe[0] > per_pipe[1]);
        assert_eq!(
            est.estimated_clock_cycles(),
            est.blocks().map(|b| b.total_cycles).max().unwrap()
        );
    }

    #[test]
    fn test_partition_column_ranges_cover_matrix() {
        let mat = uniform(10, 4);
        let arch = SpmvArchitecture::new(64, 4, 3, CyclePolicy::Simple).unwrap();
        let est = arch.preprocess(&mat).unwrap();

        let mut next = 0;
        for p in est.partitions() {
            assert_eq!(p.cols.start, next);
            next = p.cols.end;
        }
        assert_eq!(next, mat.n_cols);
    }

    #[test]
    fn test_preprocess_is_repeatable() {
        let mat = uniform(6, 3);
        let arch = SpmvArchitecture::new(16, 4, 2, CyclePolicy::SkipEmptyRows).unwrap();

        let first = arch.preprocess(&mat).unwrap();
        let second = arch.preprocess(&mat).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_matrix_estimate() {
        let mat = SparseMatrixCSR::<f64>::zeros(0, 0);
        let arch = SpmvArchitecture::with_defaults(CyclePolicy::Simple);
        let est = arch.preprocess(&mat).unwrap();

        assert_eq!(est.estimated_clock_cycles(), 0);
        assert_eq!(est.gflops_count(), 0.0);
        assert_eq!(est.estimated_gflops(), 0.0);
    }

    #[test]
    fn test_invalid_architecture_rejected() {
        assert!(SpmvArchitecture::new(0, 2, 1, CyclePolicy::Simple).is_err());

        // A zeroed field on a caller-assembled config surfaces at preprocess
        let arch = SpmvArchitecture::from_config(
            ArchConfig {
                cache_size: 8,
                input_width: 0,
                num_pipes: 1,
            },
            CyclePolicy::Simple,
        );
        assert!(arch.preprocess(&uniform(4, 2)).is_err());
    }

    #[test]
    fn test_display_summary_line() {
        let mat = uniform(4, 2);
        let arch = SpmvArchitecture::new(8, 2, 1, CyclePolicy::Fst).unwrap();
        let text = arch.preprocess(&mat).unwrap().to_string();

        assert!(text.starts_with("FstSpmvArchitecture"));
        assert!(text.contains("cacheSize = 8"));
        assert!(text.contains("inputWidth = 2"));
        assert!(text.contains("numPipes = 1"));
        assert!(text.contains("est. cycles = 4"));
    }
}
