//! Deterministic sparse-matrix generators for sweeps, tests and benches
//!
//! Every generator is seeded (ChaCha8), so a given seed always produces
//! the same matrix; sweeps over generated workloads are reproducible.

use crate::matrix::SparseMatrixCSR;
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates random square sparse matrices with a controlled average
/// number of non-zeros per row.
pub struct MatrixGenerator {
    rng: ChaCha8Rng,
}

impl MatrixGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A matrix of order `n` whose rows hold between 1 and `2 * avg_nnz`
    /// non-zeros (capped at `n`), uniformly placed.
    pub fn uniform(&mut self, n: usize, avg_nnz: usize) -> SparseMatrixCSR<f64> {
        let mut row_ptr = vec![0];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();

        let nnz_dist = Uniform::from(1..=(avg_nnz * 2).min(n));
        let col_dist = Uniform::from(0..n);
        let val_dist = Uniform::from(-10.0..10.0);

        for _ in 0..n {
            let row_nnz = nnz_dist.sample(&mut self.rng);
            let mut row_cols = std::collections::HashSet::new();

            while row_cols.len() < row_nnz {
                row_cols.insert(col_dist.sample(&mut self.rng));
            }

            let mut sorted_cols: Vec<_> = row_cols.into_iter().collect();
            sorted_cols.sort_unstable();

            for col in sorted_cols {
                col_idx.push(col);
                values.push(val_dist.sample(&mut self.rng));
            }

            row_ptr.push(col_idx.len());
        }

        SparseMatrixCSR::new(n, n, row_ptr, col_idx, values)
    }
}

/// Generates matrices with structured sparsity patterns.
pub struct PatternMatrixGenerator {
    rng: ChaCha8Rng,
}

impl PatternMatrixGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A banded matrix: each row is dense within `bandwidth` columns
    /// around the diagonal.
    pub fn banded(&mut self, n: usize, bandwidth: usize) -> SparseMatrixCSR<f64> {
        let mut row_ptr = vec![0];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();

        let val_dist = Uniform::from(-10.0..10.0);

        for i in 0..n {
            let col_start = i.saturating_sub(bandwidth / 2);
            let col_end = (i + bandwidth / 2 + 1).min(n);

            for j in col_start..col_end {
                col_idx.push(j);
                values.push(val_dist.sample(&mut self.rng));
            }

            row_ptr.push(col_idx.len());
        }

        SparseMatrixCSR::new(n, n, row_ptr, col_idx, values)
    }

    /// A block-diagonal matrix with dense-ish square blocks; rows outside
    /// any block stay empty. Empty stretches exercise the
    /// empty-row-skipping policy.
    pub fn block_diagonal(&mut self, n: usize, block_size: usize) -> SparseMatrixCSR<f64> {
        let mut row_ptr = vec![0];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();

        let val_dist = Uniform::from(-10.0..10.0);
        let num_blocks = n / block_size;

        for i in 0..n {
            let block_id = i / block_size;
            if block_id < num_blocks {
                let block_start = block_id * block_size;
                let block_end = ((block_id + 1) * block_size).min(n);
                for j in block_start..block_end {
                    if self.rng.gen_bool(0.7) {
                        col_idx.push(j);
                        values.push(val_dist.sample(&mut self.rng));
                    }
                }
            }
            row_ptr.push(col_idx.len());
        }

        SparseMatrixCSR::new(n, n, row_ptr, col_idx, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_is_deterministic_per_seed() {
        let a = MatrixGenerator::new(42).uniform(100, 8);
        let b = MatrixGenerator::new(42).uniform(100, 8);

        assert_eq!(a.row_ptr, b.row_ptr);
        assert_eq!(a.col_idx, b.col_idx);
        assert_eq!(a.values, b.values);
    }

    #[test]
    fn test_uniform_shape() {
        let m = MatrixGenerator::new(7).uniform(50, 4);
        assert_eq!(m.n_rows, 50);
        assert_eq!(m.n_cols, 50);
        for i in 0..m.n_rows {
            assert!(m.row_nnz(i) >= 1);
            assert!(m.row_nnz(i) <= 8);
        }
    }

    #[test]
    fn test_banded_stays_within_band() {
        let m = PatternMatrixGenerator::new(3).banded(64, 5);
        for i in 0..m.n_rows {
            for (col, _) in m.row_iter(i) {
                assert!(col + 3 > i && col <= i + 2, "row {} col {}", i, col);
            }
        }
    }

    #[test]
    fn test_block_diagonal_confines_entries() {
        let m = PatternMatrixGenerator::new(9).block_diagonal(60, 10);
        for i in 0..m.n_rows {
            for (col, _) in m.row_iter(i) {
                assert_eq!(col / 10, i / 10);
            }
        }
    }
}
