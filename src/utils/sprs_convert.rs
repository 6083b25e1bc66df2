//! Conversions between the crate's CSR type and `sprs` matrices
//!
//! Callers that already hold an [`sprs::CsMat`] (e.g. loaded from a
//! MatrixMarket file) can convert it here before feeding the model.

use crate::matrix::SparseMatrixCSR;
use num_traits::Num;

/// Converts a CSR matrix into an `sprs::CsMat` (CSR storage).
pub fn to_sprs_csr<T: Copy + Num>(mat: &SparseMatrixCSR<T>) -> sprs::CsMat<T> {
    sprs::CsMat::new(
        (mat.n_rows, mat.n_cols),
        mat.row_ptr.clone(),
        mat.col_idx.clone(),
        mat.values.clone(),
    )
}

/// Converts an `sprs` matrix into the crate's CSR type.
///
/// CSC inputs are converted to row-major storage first.
pub fn from_sprs_csr<T: Copy + Num + Default>(mat: &sprs::CsMat<T>) -> SparseMatrixCSR<T> {
    let csr;
    let mat = if mat.is_csr() {
        mat
    } else {
        csr = mat.to_csr();
        &csr
    };

    SparseMatrixCSR::new(
        mat.rows(),
        mat.cols(),
        mat.indptr().to_proper().to_vec(),
        mat.indices().to_vec(),
        mat.data().to_vec(),
    )
}
