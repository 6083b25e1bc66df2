//! Architecture configuration and resource accounting

use crate::constants::{BRAMS_PER_DOUBLE, BRAM_DEPTH};
use crate::model::ModelError;

/// The three parameters of a streaming SpMV architecture.
///
/// - `cache_size`: maximum number of non-zero entries a pipe's local
///   store holds at once
/// - `input_width`: number of non-zero entries the datapath consumes per
///   cycle
/// - `num_pipes`: number of parallel execution lanes
///
/// Immutable once an architecture is built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArchConfig {
    pub cache_size: usize,
    pub input_width: usize,
    pub num_pipes: usize,
}

impl ArchConfig {
    /// Builds a configuration, rejecting non-positive parameters.
    pub fn new(cache_size: usize, input_width: usize, num_pipes: usize) -> Result<Self, ModelError> {
        let config = Self {
            cache_size,
            input_width,
            num_pipes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every parameter is positive. Fields are public, so
    /// code paths that accept a caller-assembled config re-check here.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.cache_size == 0 {
            return Err(ModelError::InvalidConfiguration {
                what: "cache_size",
                value: 0,
            });
        }
        if self.input_width == 0 {
            return Err(ModelError::InvalidConfiguration {
                what: "input_width",
                value: 0,
            });
        }
        if self.num_pipes == 0 {
            return Err(ModelError::InvalidConfiguration {
                what: "num_pipes",
                value: 0,
            });
        }
        Ok(())
    }

    /// On-chip memory usage of this configuration.
    ///
    /// The local store is `cache_size` entries wide times `input_width`
    /// lanes, laid out in `BRAM_DEPTH`-deep physical blocks; double
    /// precision needs `BRAMS_PER_DOUBLE` blocks per entry. Exact integer
    /// arithmetic, evaluated left to right.
    pub fn resource_usage(&self) -> ResourceUsage {
        ResourceUsage {
            brams: self.cache_size * self.input_width / BRAM_DEPTH * BRAMS_PER_DOUBLE,
            luts: None,
            ffs: None,
            dsps: None,
        }
    }
}

/// Estimated hardware resource usage for one architecture.
///
/// Only the on-chip memory (BRAM) count is modeled; logic and DSP usage
/// are reported as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceUsage {
    /// Number of physical memory blocks
    pub brams: usize,
    /// Lookup tables (not modeled)
    pub luts: Option<usize>,
    /// Flip-flops (not modeled)
    pub ffs: Option<usize>,
    /// DSP slices (not modeled)
    pub dsps: Option<usize>,
}
