use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;

use almanac::{
    almanac::Almanac,
    load_input,
    solutions::{part1, part2},
};

/// Finds the lowest location reachable from an almanac's seeds.
#[derive(Parser)]
#[command(name = "almanac")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle input files.
    #[arg(default_value = "inputs/5.txt")]
    inputs: Vec<PathBuf>,
    /// Run only this part.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,
    /// Also print the map path and how many points were evaluated.
    #[arg(long)]
    stats: bool,
}

impl Cli {
    fn runs(&self, part: u8) -> bool {
        self.part.map_or(true, |p| p == part)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut total = Duration::default();
    for path in &cli.inputs {
        total += execute_input(path, &cli)?;
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn execute_input(path: &Path, cli: &Cli) -> Result<Duration> {
    println!("{}:", path.display());
    let input = load_input(path)?;

    let start = Instant::now();
    let almanac = Almanac::parse(&input)?;
    let first = cli.runs(1).then(|| part1(&almanac)).transpose()?;
    let second = cli.runs(2).then(|| part2(&almanac)).transpose()?;
    let elapsed = start.elapsed();

    if cli.stats {
        if let Some(path) = almanac.categories() {
            println!("  Maps: {path}");
        }
    }
    if let Some(minimum) = first {
        println!("  Part 1: {}", minimum.value);
    }
    if let Some(minimum) = second {
        println!("  Part 2: {}", minimum.value);
        if cli.stats {
            println!(
                "    seed {}, {} breakpoints, {} points tested",
                minimum.argument, minimum.breakpoints, minimum.candidates
            );
        }
    }
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}
