//! Column partitioning across parallel pipes

use crate::matrix::SparseMatrixCSR;
use crate::model::ModelError;

/// Splits `mat` into `num_pipes` contiguous column-range submatrices,
/// one per pipe.
///
/// Ranges are near-equal (`n_cols / num_pipes` wide), pairwise disjoint,
/// and cover `[0, n_cols)`; the last partition absorbs the remainder.
/// Each submatrix keeps the original row structure, with column indices
/// rebased to its own range.
pub fn partition_columns(
    mat: &SparseMatrixCSR<f64>,
    num_pipes: usize,
) -> Result<Vec<SparseMatrixCSR<f64>>, ModelError> {
    Ok(column_ranges(mat.n_cols, num_pipes)?
        .into_iter()
        .map(|range| mat.column_slice(range))
        .collect())
}

/// The column range `[lo, hi)` assigned to each pipe.
pub fn column_ranges(
    n_cols: usize,
    num_pipes: usize,
) -> Result<Vec<std::ops::Range<usize>>, ModelError> {
    if num_pipes == 0 {
        return Err(ModelError::InvalidConfiguration {
            what: "num_pipes",
            value: 0,
        });
    }

    let width = n_cols / num_pipes;
    Ok((0..num_pipes)
        .map(|pipe| {
            let lo = pipe * width;
            let hi = if pipe == num_pipes - 1 { n_cols } else { lo + width };
            lo..hi
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense_pattern(n: usize) -> SparseMatrixCSR<f64> {
        // Every entry present, value = row * n + col
        let mut row_ptr = vec![0];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        for i in 0..n {
            for j in 0..n {
                col_idx.push(j);
                values.push((i * n + j) as f64);
            }
            row_ptr.push(col_idx.len());
        }
        SparseMatrixCSR::new(n, n, row_ptr, col_idx, values)
    }

    #[test]
    fn test_partition_count_and_widths() {
        let mat = dense_pattern(10);
        let parts = partition_columns(&mat, 3).unwrap();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].n_cols, 3);
        assert_eq!(parts[1].n_cols, 3);
        // Last partition absorbs the remainder
        assert_eq!(parts[2].n_cols, 4);
        assert_eq!(parts.iter().map(|p| p.n_cols).sum::<usize>(), 10);
    }

    #[test]
    fn test_partitions_cover_all_nonzeros() {
        let mat = dense_pattern(7);
        let parts = partition_columns(&mat, 4).unwrap();

        assert_eq!(parts.iter().map(|p| p.nnz()).sum::<usize>(), mat.nnz());
        for p in &parts {
            assert_eq!(p.n_rows, mat.n_rows);
        }
    }

    #[test]
    fn test_single_pipe_is_identity_partition() {
        let mat = dense_pattern(5);
        let parts = partition_columns(&mat, 1).unwrap();

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].row_ptr, mat.row_ptr);
        assert_eq!(parts[0].col_idx, mat.col_idx);
    }

    #[test]
    fn test_more_pipes_than_columns() {
        // width = 0: all but the last partition are empty
        let mat = dense_pattern(2);
        let parts = partition_columns(&mat, 4).unwrap();

        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].n_cols, 0);
        assert_eq!(parts[3].n_cols, 2);
        assert_eq!(parts[3].nnz(), mat.nnz());
    }

    #[test]
    fn test_zero_pipes_rejected() {
        let mat = dense_pattern(4);
        assert!(matches!(
            partition_columns(&mat, 0),
            Err(ModelError::InvalidConfiguration { .. })
        ));
    }
}
