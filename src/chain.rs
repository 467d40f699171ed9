use std::collections::BTreeSet;

use crate::piecewise::PiecewiseMap;

/// Maps applied in order, each feeding its output to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapChain {
    maps: Vec<PiecewiseMap>,
}

impl MapChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, map: PiecewiseMap) {
        self.maps.push(map);
    }

    pub fn maps(&self) -> &[PiecewiseMap] {
        &self.maps
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn evaluate(&self, x: i64) -> i64 {
        self.maps.iter().fold(x, |x, map| map.transform(x))
    }

    /// Collects, in chain-input coordinates, every point at which the composed
    /// function may jump.
    ///
    /// Walks the maps last to first. Breakpoints gathered so far live in the
    /// current map's output space; they are pulled back to its input space through
    /// all of their preimages before the map's own breakpoints are added. A value
    /// with several preimages (an interval landing on an identity stretch) keeps
    /// all of them, otherwise the jump at the second one would go unnoticed.
    pub fn propagate_breakpoints_backward(&self) -> BTreeSet<i64> {
        self.maps.iter().rev().fold(BTreeSet::new(), |later, map| {
            let mut breakpoints: BTreeSet<i64> =
                later.into_iter().flat_map(|y| map.preimages(y)).collect();
            breakpoints.extend(map.own_breakpoints());
            breakpoints
        })
    }
}

impl FromIterator<PiecewiseMap> for MapChain {
    fn from_iter<T: IntoIterator<Item = PiecewiseMap>>(iter: T) -> Self {
        Self {
            maps: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piecewise::MapError;

    fn map(intervals: &[(i64, i64, i64)]) -> Result<PiecewiseMap, MapError> {
        let mut map = PiecewiseMap::new();
        for &(out_start, domain_start, length) in intervals {
            map.add_interval(out_start, domain_start, length)?;
        }
        Ok(map)
    }

    fn shift_then_pull_back() -> Result<MapChain, MapError> {
        // [0, 10) +5, then [5, 15) -3
        Ok([map(&[(5, 0, 10)])?, map(&[(2, 5, 10)])?]
            .into_iter()
            .collect())
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = MapChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.evaluate(123), 123);
        assert!(chain.propagate_breakpoints_backward().is_empty());
    }

    #[test]
    fn test_evaluate_composes_in_order() -> Result<(), MapError> {
        let chain = shift_then_pull_back()?;
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.evaluate(2), 4);
        assert_eq!(chain.evaluate(0), 2);
        // 10 misses the first map, lands inside the second
        assert_eq!(chain.evaluate(10), 7);
        assert_eq!(chain.evaluate(15), 15);
        assert_eq!(chain.evaluate(-1), -1);
        Ok(())
    }

    #[test]
    fn test_breakpoints_pulled_back_through_earlier_maps() -> Result<(), MapError> {
        let chain = shift_then_pull_back()?;
        let breakpoints: Vec<_> = chain.propagate_breakpoints_backward().into_iter().collect();
        // second map's 5 pulls back to 0, its 15 only through the identity
        assert_eq!(breakpoints, vec![0, 10, 15]);
        Ok(())
    }

    #[test]
    fn test_breakpoints_keep_every_preimage() -> Result<(), MapError> {
        // 100..110 lands on 0..10, which the identity also reaches from 0..10
        let chain: MapChain = [map(&[(0, 100, 10)])?, map(&[(1_000, 0, 5)])?]
            .into_iter()
            .collect();
        let breakpoints = chain.propagate_breakpoints_backward();
        assert!(breakpoints.contains(&5));
        assert!(breakpoints.contains(&105));
        Ok(())
    }
}
