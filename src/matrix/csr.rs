//! Compressed Sparse Row (CSR) matrix format
//!
//! The architecture model consumes matrices in CSR form: a `row_ptr` array
//! of size `n_rows + 1` indexing into paired `col_idx`/`values` arrays of
//! size `nnz`. Besides basic accessors, the type supports slicing by
//! column range (used by the partitioner) and a dense-vector product
//! (used only to validate a model against a known result).

use ndarray::{Array1, ArrayView1};
use num_traits::Num;
use std::fmt;
use std::ops::{AddAssign, Range};

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// Invariants, checked at construction:
/// - `row_ptr.len() == n_rows + 1`, `row_ptr[0] == 0`, monotone
///   non-decreasing, `row_ptr[n_rows] == nnz`
/// - `col_idx.len() == values.len() == nnz`, all indices `< n_cols`
///
/// Column indices within a row are assumed unique; values may be any
/// representable number, including explicit zeros.
#[derive(Clone)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR matrix from raw arrays.
    ///
    /// # Panics
    ///
    /// Panics if the arrays are inconsistent with the invariants above.
    /// Malformed storage is a caller bug, not a recoverable condition.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[n_rows],
            col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );
        assert_eq!(row_ptr[0], 0, "row_ptr[0] must be 0");
        assert!(
            row_ptr.windows(2).all(|w| w[0] <= w[1]),
            "row_ptr must be non-decreasing"
        );

        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the number of non-zero entries in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the number of non-zero entries in row `i`
    pub fn row_nnz(&self, i: usize) -> usize {
        assert!(i < self.n_rows, "Row index out of bounds");
        self.row_ptr[i + 1] - self.row_ptr[i]
    }

    /// Returns an iterator over the `(col_idx, value)` pairs of row `i`
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
            values: vec![T::one(); n],
        }
    }

    /// Returns the submatrix restricted to the columns in `cols`.
    ///
    /// The result has `cols.len()` columns with indices rebased to start
    /// at 0, and the same number of rows as `self` (rows that have no
    /// entry in the range become empty). Entry order within each row is
    /// preserved.
    pub fn column_slice(&self, cols: Range<usize>) -> Self {
        assert!(cols.end <= self.n_cols, "Column range out of bounds");

        let mut row_ptr = Vec::with_capacity(self.n_rows + 1);
        let mut col_idx = Vec::new();
        let mut values = Vec::new();

        row_ptr.push(0);
        for i in 0..self.n_rows {
            for (col, &val) in self.row_iter(i) {
                if cols.contains(&col) {
                    col_idx.push(col - cols.start);
                    values.push(val);
                }
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            n_rows: self.n_rows,
            n_cols: cols.len(),
            row_ptr,
            col_idx,
            values,
        }
    }
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num + AddAssign,
{
    /// Multiplies the matrix by a dense vector, returning `A * x`.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != n_cols`.
    pub fn spmv(&self, x: ArrayView1<T>) -> Array1<T> {
        assert_eq!(x.len(), self.n_cols, "Vector length must equal n_cols");

        let mut y = Array1::zeros(self.n_rows);
        for i in 0..self.n_rows {
            let mut acc = T::zero();
            for (col, &val) in self.row_iter(i) {
                acc += val * x[col];
            }
            y[i] = acc;
        }
        y
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_rows_to_print = 5.min(self.n_rows);
        for i in 0..max_rows_to_print {
            write!(f, "  row {}: ", i)?;
            if self.row_nnz(i) == 0 {
                writeln!(f, "(empty)")?;
            } else {
                for (col, val) in self.row_iter(i).take(5) {
                    write!(f, "({}, {:?}) ", col, val)?;
                }
                if self.row_nnz(i) > 5 {
                    write!(f, "... ({} more)", self.row_nnz(i) - 5)?;
                }
                writeln!(f)?;
            }
        }
        if self.n_rows > max_rows_to_print {
            writeln!(f, "  ... ({} more rows)", self.n_rows - max_rows_to_print)?;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> SparseMatrixCSR<f64> {
        SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        )
    }

    #[test]
    fn test_new_matrix() {
        let matrix = sample();

        assert_eq!(matrix.n_rows, 3);
        assert_eq!(matrix.n_cols, 3);
        assert_eq!(matrix.nnz(), 5);
        assert_eq!(matrix.row_nnz(0), 2);
        assert_eq!(matrix.row_nnz(1), 1);
    }

    #[test]
    fn test_row_iter() {
        let matrix = sample();

        let row0: Vec<_> = matrix.row_iter(0).collect();
        assert_eq!(row0, vec![(0, &1.0), (1, &2.0)]);

        let row2: Vec<_> = matrix.row_iter(2).collect();
        assert_eq!(row2, vec![(0, &4.0), (2, &5.0)]);
    }

    #[test]
    fn test_column_slice() {
        let matrix = sample();
        let left = matrix.column_slice(0..2);

        assert_eq!(left.n_rows, 3);
        assert_eq!(left.n_cols, 2);
        assert_eq!(left.row_ptr, vec![0, 2, 3, 4]);
        assert_eq!(left.col_idx, vec![0, 1, 1, 0]);
        assert_eq!(left.values, vec![1.0, 2.0, 3.0, 4.0]);

        let right = matrix.column_slice(2..3);
        assert_eq!(right.n_cols, 1);
        assert_eq!(right.row_ptr, vec![0, 0, 0, 1]);
        assert_eq!(right.col_idx, vec![0]);
        assert_eq!(right.values, vec![5.0]);
    }

    #[test]
    fn test_column_slices_rebuild_row_nnz() {
        let matrix = sample();
        let left = matrix.column_slice(0..2);
        let right = matrix.column_slice(2..3);

        for i in 0..matrix.n_rows {
            assert_eq!(left.row_nnz(i) + right.row_nnz(i), matrix.row_nnz(i));
        }
    }

    #[test]
    fn test_spmv() {
        let matrix = sample();
        let x = array![1.0, 2.0, 3.0];
        let y = matrix.spmv(x.view());

        assert_eq!(y, array![5.0, 6.0, 19.0]);
    }

    #[test]
    fn test_identity_spmv() {
        let id = SparseMatrixCSR::<f64>::identity(4);
        let x = array![1.0, -2.0, 0.5, 7.0];
        assert_eq!(id.spmv(x.view()), x);
    }

    #[test]
    #[should_panic(expected = "row_ptr.len() must be n_rows + 1")]
    fn test_invalid_row_ptr() {
        SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3], // Missing last element
            vec![0, 1, 1, 0, 2],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        );
    }

    #[test]
    #[should_panic(expected = "col_idx.len() must equal values.len()")]
    fn test_inconsistent_lengths() {
        SparseMatrixCSR::new(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0, 2.0, 3.0, 4.0], // Missing last element
        );
    }
}
