//! Design-space enumeration over architecture parameters
//!
//! [`ArchSpace`] walks the Cartesian product of the three sweep
//! dimensions, producing one [`SpmvArchitecture`] per point. Cache size
//! varies fastest, then input width, then pipe count; the space
//! terminates when the slowest dimension wraps and can be restarted for
//! another identical sweep.

use crate::constants::{DEFAULT_CACHE_SIZE_RANGE, DEFAULT_INPUT_WIDTH_RANGE, DEFAULT_NUM_PIPES_RANGE};
use crate::model::architecture::SpmvArchitecture;
use crate::model::config::ArchConfig;
use crate::model::cycles::CyclePolicy;
use crate::model::ModelError;
use crate::utils::Range;

/// A finite, restartable enumerator over `(cacheSize, inputWidth,
/// numPipes)` combinations.
///
/// Holds mutable cursor state and is not safe for concurrent advancement;
/// parallel exploration should give each worker its own space over a
/// disjoint sub-range (see [`ArchSpace::split`]).
#[derive(Debug, Clone)]
pub struct ArchSpace {
    cache_size: Range,
    input_width: Range,
    num_pipes: Range,
    policy: CyclePolicy,
    last: bool,
}

impl ArchSpace {
    /// A space over explicit ranges.
    pub fn new(
        num_pipes: Range,
        input_width: Range,
        cache_size: Range,
        policy: CyclePolicy,
    ) -> Self {
        Self {
            cache_size,
            input_width,
            num_pipes,
            policy,
            last: false,
        }
    }

    /// The default sweep: cache sizes 1024..=4096 by 512, input widths
    /// 8..=100 by 8, pipe counts 1..=6.
    pub fn with_defaults(policy: CyclePolicy) -> Result<Self, ModelError> {
        let (cs, ce, ct) = DEFAULT_CACHE_SIZE_RANGE;
        let (ws, we, wt) = DEFAULT_INPUT_WIDTH_RANGE;
        let (ps, pe, pt) = DEFAULT_NUM_PIPES_RANGE;
        Ok(Self::new(
            Range::new(ps, pe, pt)?,
            Range::new(ws, we, wt)?,
            Range::new(cs, ce, ct)?,
            policy,
        ))
    }

    /// Number of points the space enumerates in total.
    pub fn len(&self) -> usize {
        self.cache_size.len() * self.input_width.len() * self.num_pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets every dimension and clears the termination flag; the next
    /// sweep reproduces the original sequence exactly.
    pub fn restart(&mut self) {
        self.cache_size.restart();
        self.input_width.restart();
        self.num_pipes.restart();
        self.last = false;
    }

    /// Produces the architecture at the current cursor and advances:
    /// cache size first, carrying into input width and then pipe count
    /// exactly when a dimension wraps to its start.
    pub fn next_architecture(&mut self) -> Option<SpmvArchitecture> {
        if self.last {
            return None;
        }

        let result = SpmvArchitecture::from_config(
            ArchConfig {
                cache_size: self.cache_size.crt,
                input_width: self.input_width.crt,
                num_pipes: self.num_pipes.crt,
            },
            self.policy,
        );

        self.cache_size.advance();
        if self.cache_size.at_start() {
            self.input_width.advance();
            if self.input_width.at_start() {
                self.num_pipes.advance();
                if self.num_pipes.at_start() {
                    self.last = true;
                }
            }
        }

        Some(result)
    }

    /// Splits the space into up to `parts` sub-spaces with disjoint
    /// pipe-count ranges (the slowest dimension), for independent
    /// concurrent sweeping. The union of the sub-spaces' points equals
    /// this space's points.
    pub fn split(&self, parts: usize) -> Vec<ArchSpace> {
        let pipe_values = self.num_pipes.values();
        let parts = parts.clamp(1, pipe_values.len());
        let per_chunk = pipe_values.len().div_ceil(parts);

        pipe_values
            .chunks(per_chunk)
            .map(|chunk| {
                let mut sub = self.clone();
                sub.restart();
                // chunk values are start + k*step for consecutive k, so
                // they form a valid sub-range with the same step
                sub.num_pipes = Range {
                    start: chunk[0],
                    stop: chunk[chunk.len() - 1],
                    step: self.num_pipes.step,
                    crt: chunk[0],
                };
                sub
            })
            .collect()
    }
}

impl Iterator for ArchSpace {
    type Item = SpmvArchitecture;

    fn next(&mut self) -> Option<SpmvArchitecture> {
        self.next_architecture()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.last {
            (0, Some(0))
        } else {
            (0, Some(self.len()))
        }
    }
}
