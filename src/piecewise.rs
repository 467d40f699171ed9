use std::collections::BTreeSet;

use thiserror::Error;

use crate::interval::{Interval, IntervalError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error(transparent)]
    Interval(#[from] IntervalError),
    #[error("interval {inserted:?} overlaps existing interval {existing:?}")]
    Overlap {
        existing: std::ops::Range<i64>,
        inserted: std::ops::Range<i64>,
    },
}

/// A discontinuous function over the integers: `x + delta` inside one of its
/// intervals, identity everywhere else.
///
/// Intervals are kept in two orders, by domain start for [`transform`](Self::transform)
/// and by range start for [`untransform`](Self::untransform). Both are updated on
/// every insertion so queries are valid at any point while the map is being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PiecewiseMap {
    by_domain: Vec<Interval>,
    by_range: Vec<Interval>,
}

impl PiecewiseMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_interval(
        &mut self,
        out_start: i64,
        domain_start: i64,
        length: i64,
    ) -> Result<(), MapError> {
        let interval = Interval::new(out_start, domain_start, length)?;
        self.insert(interval)
    }

    pub fn insert(&mut self, interval: Interval) -> Result<(), MapError> {
        let pos = self
            .by_domain
            .partition_point(|i| i.domain_start() < interval.domain_start());

        // Sorted and disjoint, so only the two neighbours can collide.
        let neighbours = pos.checked_sub(1).into_iter().chain([pos]);
        for n in neighbours {
            if let Some(existing) = self.by_domain.get(n) {
                if existing.overlaps(&interval) {
                    return Err(MapError::Overlap {
                        existing: existing.domain(),
                        inserted: interval.domain(),
                    });
                }
            }
        }
        self.by_domain.insert(pos, interval);

        let pos = self
            .by_range
            .partition_point(|i| i.range_start() <= interval.range_start());
        self.by_range.insert(pos, interval);
        Ok(())
    }

    pub fn transform(&self, x: i64) -> i64 {
        for interval in &self.by_domain {
            if x < interval.domain_start() {
                break;
            }
            if x >= interval.domain_end() {
                continue;
            }
            return x + interval.delta();
        }
        x
    }

    /// Inverse of [`transform`](Self::transform). When several intervals cover
    /// `y` the one with the lowest range start wins.
    pub fn untransform(&self, y: i64) -> i64 {
        for interval in &self.by_range {
            if y < interval.range_start() {
                break;
            }
            if y >= interval.range_end() {
                continue;
            }
            return y - interval.delta();
        }
        y
    }

    /// Every `x` with `transform(x) == y`, ascending.
    pub fn preimages(&self, y: i64) -> Vec<i64> {
        let mut xs: Vec<i64> = self
            .by_range
            .iter()
            .take_while(|i| i.range_start() <= y)
            .filter(|i| i.covers(y))
            .map(|i| y - i.delta())
            .collect();
        if !self.by_domain.iter().any(|i| i.contains(y)) {
            xs.push(y);
        }
        xs.sort_unstable();
        xs.dedup();
        xs
    }

    /// Domain starts and ends of every interval: the only inputs at which this
    /// map switches between translations.
    pub fn own_breakpoints(&self) -> BTreeSet<i64> {
        self.by_domain
            .iter()
            .flat_map(|i| [i.domain_start(), i.domain_end()])
            .collect()
    }

    /// Intervals in domain order.
    pub fn intervals(&self) -> &[Interval] {
        &self.by_domain
    }

    pub fn len(&self) -> usize {
        self.by_domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_domain.is_empty()
    }
}
