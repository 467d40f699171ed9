use std::{num::ParseIntError, str::FromStr};

use thiserror::Error;

use crate::{
    chain::MapChain,
    interval::{InputInterval, IntervalError},
    piecewise::{MapError, PiecewiseMap},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing `seeds:` line")]
    MissingSeeds,
    #[error("second `seeds:` line on line {0}")]
    DuplicateSeeds(usize),
    #[error("invalid number {token:?} on line {line}")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("expected 3 numbers on line {line}, got {found}")]
    WrongFieldCount { line: usize, found: usize },
    #[error("interval on line {0} comes before any map header")]
    IntervalBeforeMap(usize),
    #[error("seed list has an odd number of values ({0}), cannot pair into ranges")]
    OddSeedCount(usize),
    #[error("bad interval on line {line}")]
    Map {
        line: usize,
        #[source]
        source: MapError,
    },
    #[error("bad seed range")]
    Interval(#[from] IntervalError),
}

/// Category names from a `<source>-to-<destination> map:` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapHeader {
    pub source: String,
    pub destination: String,
}

impl MapHeader {
    fn parse(line: &str) -> Option<Self> {
        let names = line.strip_suffix(" map:")?;
        let (source, destination) = names.split_once("-to-")?;
        let valid = |name: &str| !name.is_empty() && !name.contains(char::is_whitespace);
        if !valid(source) || !valid(destination) {
            return None;
        }
        Some(Self {
            source: source.to_string(),
            destination: destination.to_string(),
        })
    }
}

/// Parsed puzzle input: seed values and the chain of maps they run through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<i64>,
    /// One per map, `None` when the header did not name its categories.
    pub headers: Vec<Option<MapHeader>>,
    pub chain: MapChain,
}

impl Almanac {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut seeds = None;
        let mut headers = Vec::new();
        let mut maps: Vec<PiecewiseMap> = Vec::new();

        for (i, line) in input.lines().enumerate() {
            let line_no = i + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix("seeds:") {
                if seeds.is_some() {
                    return Err(ParseError::DuplicateSeeds(line_no));
                }
                let values = rest
                    .split_ascii_whitespace()
                    .map(|token| parse_number(line_no, token))
                    .collect::<Result<Vec<_>, _>>()?;
                seeds = Some(values);
            } else if line.contains("map") {
                headers.push(MapHeader::parse(line));
                maps.push(PiecewiseMap::new());
            } else {
                let map = maps
                    .last_mut()
                    .ok_or(ParseError::IntervalBeforeMap(line_no))?;
                let fields = line
                    .split_ascii_whitespace()
                    .map(|token| parse_number(line_no, token))
                    .collect::<Result<Vec<_>, _>>()?;
                let &[out_start, domain_start, length] = fields.as_slice() else {
                    return Err(ParseError::WrongFieldCount {
                        line: line_no,
                        found: fields.len(),
                    });
                };
                map.add_interval(out_start, domain_start, length)
                    .map_err(|source| ParseError::Map {
                        line: line_no,
                        source,
                    })?;
            }
        }

        Ok(Self {
            seeds: seeds.ok_or(ParseError::MissingSeeds)?,
            headers,
            chain: maps.into_iter().collect(),
        })
    }

    /// The seed list read as `start length` pairs.
    pub fn seed_intervals(&self) -> Result<Vec<InputInterval>, ParseError> {
        if self.seeds.len() % 2 != 0 {
            return Err(ParseError::OddSeedCount(self.seeds.len()));
        }
        Ok(self
            .seeds
            .chunks_exact(2)
            .map(|pair| InputInterval::new(pair[0], pair[1]))
            .collect::<Result<_, IntervalError>>()?)
    }

    /// `seed -> soil -> ... -> location`, if every header names its categories
    /// and each map picks up where the previous one left off.
    pub fn categories(&self) -> Option<String> {
        let headers = self
            .headers
            .iter()
            .map(Option::as_ref)
            .collect::<Option<Vec<_>>>()?;
        let first = headers.first()?;
        if headers.windows(2).any(|w| w[0].destination != w[1].source) {
            return None;
        }
        let mut path = vec![first.source.as_str()];
        path.extend(headers.iter().map(|h| h.destination.as_str()));
        Some(path.join(" -> "))
    }
}

impl FromStr for Almanac {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_number(line: usize, token: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|source| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        seeds: 79 14 55 13

        seed-to-soil map:
        50 98 2
        52 50 48

        soil-to-fertilizer map:
        0 15 37
        37 52 2
        39 0 15
    "};

    #[test]
    fn test_parse() -> anyhow::Result<()> {
        let almanac: Almanac = EXAMPLE.parse()?;
        assert_eq!(almanac.seeds, vec![79, 14, 55, 13]);
        assert_eq!(almanac.chain.len(), 2);
        assert_eq!(almanac.chain.maps()[0].len(), 2);
        assert_eq!(almanac.chain.maps()[1].len(), 3);
        assert_eq!(almanac.chain.maps()[0].transform(79), 81);
        assert_eq!(almanac.chain.evaluate(79), 81);
        assert_eq!(
            almanac.headers[1],
            Some(MapHeader {
                source: "soil".to_string(),
                destination: "fertilizer".to_string(),
            })
        );
        assert_eq!(
            almanac.categories().as_deref(),
            Some("seed -> soil -> fertilizer")
        );
        Ok(())
    }

    #[test]
    fn test_seed_intervals() -> anyhow::Result<()> {
        let almanac = Almanac::parse(EXAMPLE)?;
        assert_eq!(
            almanac.seed_intervals()?,
            vec![InputInterval::new(79, 14)?, InputInterval::new(55, 13)?]
        );
        Ok(())
    }

    #[test]
    fn test_unnamed_header() -> anyhow::Result<()> {
        let almanac = Almanac::parse("seeds: 1 2\nsome map\n5 0 10\n")?;
        assert_eq!(almanac.headers, vec![None]);
        assert_eq!(almanac.categories(), None);
        assert_eq!(almanac.chain.evaluate(1), 6);
        Ok(())
    }

    #[test]
    fn test_broken_category_path() -> anyhow::Result<()> {
        let almanac = Almanac::parse("seeds: 1\na-to-b map:\nc-to-d map:\n")?;
        assert_eq!(almanac.categories(), None);
        Ok(())
    }

    #[test]
    fn test_odd_seed_count() -> anyhow::Result<()> {
        let almanac = Almanac::parse("seeds: 1 2 3\n")?;
        assert_eq!(almanac.seed_intervals(), Err(ParseError::OddSeedCount(3)));
        Ok(())
    }

    #[test]
    fn test_malformed_inputs() {
        assert_eq!(
            Almanac::parse("a-to-b map:\n1 2 3\n"),
            Err(ParseError::MissingSeeds)
        );
        assert_eq!(
            Almanac::parse("seeds: 1 2\n\nseeds: 3 4\n"),
            Err(ParseError::DuplicateSeeds(3))
        );
        assert_eq!(
            Almanac::parse("seeds: 1 2\n1 2 3\n"),
            Err(ParseError::IntervalBeforeMap(2))
        );
        assert_eq!(
            Almanac::parse("seeds: 1 2\na-to-b map:\n1 2\n"),
            Err(ParseError::WrongFieldCount { line: 3, found: 2 })
        );
        assert!(matches!(
            Almanac::parse("seeds: 1 x\n"),
            Err(ParseError::InvalidNumber { line: 1, ref token, .. }) if token == "x"
        ));
        assert!(matches!(
            Almanac::parse("seeds: 1 2\na-to-b map:\n0 10 5\n0 12 5\n"),
            Err(ParseError::Map {
                line: 4,
                source: MapError::Overlap { .. }
            })
        ));
        assert!(matches!(
            Almanac::parse("seeds: 1 2\na-to-b map:\n0 10 0\n"),
            Err(ParseError::Map {
                line: 3,
                source: MapError::Interval(IntervalError::EmptyLength(0))
            })
        ));
    }
}
