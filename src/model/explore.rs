//! Sweep drivers over a design space
//!
//! Serial and parallel evaluation of every architecture in an
//! [`ArchSpace`] against one matrix. Architectures are independent, so
//! the parallel driver hands each rayon worker its own enumerator over a
//! disjoint sub-space instead of sharing one cursor.

use crate::matrix::SparseMatrixCSR;
use crate::model::architecture::ModelEstimate;
use crate::model::space::ArchSpace;
use crate::model::ModelError;
use rayon::prelude::*;

/// One evaluated point of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub estimate: ModelEstimate,
}

/// Evaluates every architecture in `space`, in enumeration order.
///
/// The space is left exhausted; call [`ArchSpace::restart`] to reuse it.
pub fn sweep(
    space: &mut ArchSpace,
    mat: &SparseMatrixCSR<f64>,
) -> Result<Vec<SweepPoint>, ModelError> {
    let mut points = Vec::with_capacity(space.len());
    while let Some(arch) = space.next_architecture() {
        points.push(SweepPoint {
            estimate: arch.preprocess(mat)?,
        });
    }
    Ok(points)
}

/// Evaluates every architecture in `space` across all CPU cores.
///
/// The space is split into per-worker sub-spaces with disjoint pipe-count
/// ranges; each worker drains its own enumerator. Results are returned in
/// the same order a serial sweep would produce.
pub fn sweep_parallel(
    space: &ArchSpace,
    mat: &SparseMatrixCSR<f64>,
) -> Result<Vec<SweepPoint>, ModelError> {
    let mut sub_results = space
        .split(num_cpus::get())
        .into_par_iter()
        .map(|mut sub| sweep(&mut sub, mat))
        .collect::<Result<Vec<_>, _>>()?;

    // Sub-spaces are ordered by pipe count, matching enumeration order
    let mut points = Vec::with_capacity(space.len());
    for sub in sub_results.drain(..) {
        points.extend(sub);
    }
    Ok(points)
}

/// The point with the fewest estimated clock cycles, ties broken by the
/// earlier enumeration position.
pub fn best_by_cycles(points: &[SweepPoint]) -> Option<&SweepPoint> {
    points
        .iter()
        .min_by_key(|p| p.estimate.estimated_clock_cycles())
}
