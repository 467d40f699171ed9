use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("interval length must be positive, got {0}")]
    EmptyLength(i64),
    #[error("interval end overflows (start = {start}, length = {length})")]
    Overflow { start: i64, length: i64 },
}

/// One domain sub-range of a piecewise map, translated by a constant `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    domain_start: i64,
    length: i64,
    delta: i64,
}

impl Interval {
    /// Builds an interval from an almanac line `out_start domain_start length`.
    pub fn new(out_start: i64, domain_start: i64, length: i64) -> Result<Self, IntervalError> {
        if length <= 0 {
            return Err(IntervalError::EmptyLength(length));
        }
        let overflow = IntervalError::Overflow {
            start: domain_start,
            length,
        };
        domain_start.checked_add(length).ok_or(overflow.clone())?;
        out_start.checked_add(length).ok_or(overflow.clone())?;
        let delta = out_start.checked_sub(domain_start).ok_or(overflow)?;

        Ok(Self {
            domain_start,
            length,
            delta,
        })
    }

    pub fn domain_start(&self) -> i64 {
        self.domain_start
    }

    /// Exclusive.
    pub fn domain_end(&self) -> i64 {
        self.domain_start + self.length
    }

    pub fn range_start(&self) -> i64 {
        self.domain_start + self.delta
    }

    /// Exclusive.
    pub fn range_end(&self) -> i64 {
        self.domain_end() + self.delta
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn delta(&self) -> i64 {
        self.delta
    }

    pub fn domain(&self) -> Range<i64> {
        self.domain_start..self.domain_end()
    }

    pub fn range(&self) -> Range<i64> {
        self.range_start()..self.range_end()
    }

    pub fn contains(&self, x: i64) -> bool {
        self.domain().contains(&x)
    }

    pub fn covers(&self, y: i64) -> bool {
        self.range().contains(&y)
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.domain_start < other.domain_end() && other.domain_start < self.domain_end()
    }
}

/// A contiguous span of chain inputs, taken from the seed list two values at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct InputInterval {
    start: i64,
    length: i64,
}

impl InputInterval {
    pub fn new(start: i64, length: i64) -> Result<Self, IntervalError> {
        if length <= 0 {
            return Err(IntervalError::EmptyLength(length));
        }
        start
            .checked_add(length)
            .ok_or(IntervalError::Overflow { start, length })?;
        Ok(Self { start, length })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// Exclusive.
    pub fn end(&self) -> i64 {
        self.start + self.length
    }

    pub fn contains(&self, x: i64) -> bool {
        self.start <= x && x < self.end()
    }
}
