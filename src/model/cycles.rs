//! Per-block cycle-count policies
//!
//! Each policy models how a fixed-width datapath streams a block's
//! non-zeros, given the block's cumulative row pointers. `row_deltas[i]`
//! is the cumulative non-zero offset after row `i`, so
//! `row_deltas[i] - row_deltas[i - 1]` is row `i`'s non-zero count (the
//! first row's count is `row_deltas[0]` itself). All policies are pure
//! functions of their inputs.

/// Timing policy for the block cycle simulator.
///
/// Selected once at architecture construction; the partitioning, blocking
/// and aggregation around it are shared by all variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Baseline: a row's entries drain at `input_width` per cycle and a
    /// cycle never carries entries from two rows, so each row costs
    /// `ceil(nnz / input_width)` cycles and an empty row still costs one.
    Simple,
    /// FST-based datapath. The cycle accounting currently matches
    /// [`CyclePolicy::Simple`]; it is kept as a separate policy because
    /// its resource and clock assumptions differ and divergent tuning is
    /// expected.
    Fst,
    /// Packs non-zeros from consecutive rows into the same cycle via a
    /// persistent lane cursor, and acknowledges a run of empty rows with
    /// a single cycle.
    SkipEmptyRows,
}

impl CyclePolicy {
    /// Human-readable architecture name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            CyclePolicy::Simple => "SimpleSpmvArchitecture",
            CyclePolicy::Fst => "FstSpmvArchitecture",
            CyclePolicy::SkipEmptyRows => "SkipEmptyRowsSpmvArchitecture",
        }
    }

    /// Clock cycles needed to stream a block with the given cumulative
    /// row pointers through a datapath of the given width.
    ///
    /// An empty slice (a block with no rows) costs zero cycles.
    pub fn cycle_count(&self, row_deltas: &[usize], input_width: usize) -> u64 {
        match self {
            CyclePolicy::Simple => row_bound_cycles(row_deltas, input_width),
            // Same formula as Simple for now, kept independently tunable.
            CyclePolicy::Fst => row_bound_cycles(row_deltas, input_width),
            CyclePolicy::SkipEmptyRows => skip_empty_cycles(row_deltas, input_width),
        }
    }
}

/// One row per burst: drain up to `input_width` entries per cycle, at
/// least one cycle per row (the drain loop runs at least once).
fn row_bound_cycles(row_deltas: &[usize], input_width: usize) -> u64 {
    let mut cycles = 0;
    for i in 0..row_deltas.len() {
        let mut toread = row_deltas[i] - if i > 0 { row_deltas[i - 1] } else { 0 };
        loop {
            toread = toread.saturating_sub(input_width);
            cycles += 1;
            if toread == 0 {
                break;
            }
        }
    }
    cycles
}

/// Cross-row packing: `crt_pos` is the datapath lane cursor and persists
/// across rows. The first empty row after a non-empty one costs a single
/// acknowledgement cycle; further consecutive empty rows cost nothing.
fn skip_empty_cycles(row_deltas: &[usize], input_width: usize) -> u64 {
    let mut cycles = 0;
    let mut crt_pos = 0;
    let mut prev_empty = false;

    for i in 0..row_deltas.len() {
        let mut toread = row_deltas[i] - if i > 0 { row_deltas[i - 1] } else { 0 };

        if toread == 0 {
            if !prev_empty {
                cycles += 1;
            }
            prev_empty = true;
            continue;
        }
        prev_empty = false;

        while toread > 0 {
            let canread = (input_width - crt_pos).min(toread);
            crt_pos = (crt_pos + canread) % input_width;
            cycles += 1;
            toread -= canread;
        }
    }
    cycles
}
