// Sparse matrix storage used as the model's input type

pub mod csr;

pub use csr::SparseMatrixCSR;
