//! Seed almanac solver: piecewise-linear integer maps, their composition, and
//! the minimum of a composed chain over billion-wide input ranges.

pub mod almanac;
pub mod chain;
pub mod interval;
pub mod minimize;
pub mod piecewise;
pub mod solutions;

use std::path::Path;

use anyhow::{Context, Result};

pub use solutions::day5;

pub fn load_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

pub fn default_input() -> Result<String> {
    load_input("inputs/5.txt")
}
