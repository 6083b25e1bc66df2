//! Restartable arithmetic range, the building block for design-space sweeps

use crate::model::ModelError;

/// A deterministic, restartable enumerator over the inclusive arithmetic
/// range `start, start + step, ..., stop`.
///
/// The cursor `crt` holds the current value. [`Range::advance`] moves to
/// the next value and wraps back to `start` once the next value would pass
/// `stop`; [`Range::at_start`] reports whether the last advance wrapped,
/// which is how an outer sweep dimension knows to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub stop: usize,
    pub step: usize,
    /// Current value of the enumerator
    pub crt: usize,
}

impl Range {
    /// Creates a range over `start..=stop` advancing by `step`.
    ///
    /// Rejects `step == 0`, `stop < start`, and `start == 0`: every sweep
    /// dimension of the architecture model is a positive count.
    pub fn new(start: usize, stop: usize, step: usize) -> Result<Self, ModelError> {
        if start == 0 {
            return Err(ModelError::InvalidConfiguration {
                what: "range start",
                value: start as i64,
            });
        }
        if step == 0 {
            return Err(ModelError::InvalidConfiguration {
                what: "range step",
                value: step as i64,
            });
        }
        if stop < start {
            return Err(ModelError::InvalidConfiguration {
                what: "range stop (below start)",
                value: stop as i64,
            });
        }
        Ok(Self {
            start,
            stop,
            step,
            crt: start,
        })
    }

    /// Advances to the next value, wrapping to `start` past `stop`.
    pub fn advance(&mut self) {
        let next = self.crt + self.step;
        self.crt = if next > self.stop { self.start } else { next };
    }

    /// True when the cursor sits at the first value (i.e. just wrapped).
    pub fn at_start(&self) -> bool {
        self.crt == self.start
    }

    /// Resets the cursor to the first value.
    pub fn restart(&mut self) {
        self.crt = self.start;
    }

    /// Number of values the range enumerates.
    pub fn len(&self) -> usize {
        (self.stop - self.start) / self.step + 1
    }

    pub fn is_empty(&self) -> bool {
        false // a valid range always holds at least `start`
    }

    /// Collects every value of the range, ignoring the cursor.
    pub fn values(&self) -> Vec<usize> {
        (0..self.len()).map(|i| self.start + i * self.step).collect()
    }
}
