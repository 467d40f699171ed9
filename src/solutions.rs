use anyhow::Result;

use crate::{
    almanac::Almanac,
    minimize::{minimum_of_points, minimum_over, Minimum},
};

/// Lowest location for the listed seeds, then for the seed ranges.
pub fn day5(input: &str) -> Result<(i64, i64)> {
    let almanac = Almanac::parse(input)?;
    Ok((part1(&almanac)?.value, part2(&almanac)?.value))
}

pub fn part1(almanac: &Almanac) -> Result<Minimum> {
    Ok(minimum_of_points(&almanac.seeds, &almanac.chain)?)
}

pub fn part2(almanac: &Almanac) -> Result<Minimum> {
    let inputs = almanac.seed_intervals()?;
    Ok(minimum_over(&inputs, &almanac.chain)?)
}
