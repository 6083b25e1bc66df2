//! Centralized constants for the SpMV architecture model
//!
//! This module contains the hardcoded hardware parameters used throughout
//! the codebase. All new constants should be added here rather than
//! scattered throughout the code.

// ============================================================================
// ON-CHIP MEMORY MODEL
// ============================================================================

/// Depth (number of words) of a physical on-chip memory block
pub const BRAM_DEPTH: usize = 512;

/// Number of physical memory blocks needed per double-precision entry
/// (a 512-deep, 40-bit-wide block holds half of a 64-bit word)
pub const BRAMS_PER_DOUBLE: usize = 2;

// ============================================================================
// CLOCKING
// ============================================================================

/// Nominal accelerator clock used when converting cycle counts to
/// sustained GFlops
pub const NOMINAL_CLOCK_HZ: f64 = 100e6;

// ============================================================================
// DEFAULT DESIGN SPACE
// ============================================================================

/// Default cache-size sweep range (entries per pipe): start, stop, step
pub const DEFAULT_CACHE_SIZE_RANGE: (usize, usize, usize) = (1024, 4096, 512);

/// Default input-width sweep range (entries per cycle): start, stop, step
pub const DEFAULT_INPUT_WIDTH_RANGE: (usize, usize, usize) = (8, 100, 8);

/// Default pipe-count sweep range: start, stop, step
pub const DEFAULT_NUM_PIPES_RANGE: (usize, usize, usize) = (1, 6, 1);

/// Default single-point cache size (entries per pipe)
pub const DEFAULT_CACHE_SIZE: usize = 2048;

/// Default datapath input width (entries per cycle)
pub const DEFAULT_INPUT_WIDTH: usize = 48;

/// Default number of parallel pipes
pub const DEFAULT_NUM_PIPES: usize = 1;
