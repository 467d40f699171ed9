use rayon::prelude::*;
use thiserror::Error;

use crate::{chain::MapChain, interval::InputInterval};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MinimizeError {
    #[error("no inputs to minimize over")]
    NoInput,
}

/// Result of a minimization, with the sizes of the point sets that were examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimum {
    pub value: i64,
    /// Lowest input reaching `value`.
    pub argument: i64,
    pub breakpoints: usize,
    pub candidates: usize,
}

/// Minimum of the chain over explicit inputs.
pub fn minimum_of_points(points: &[i64], chain: &MapChain) -> Result<Minimum, MinimizeError> {
    let (value, argument) = evaluate_all(points, chain)?;
    Ok(Minimum {
        value,
        argument,
        breakpoints: 0,
        candidates: points.len(),
    })
}

/// Minimum of the chain over every integer of `inputs`, without visiting them all.
///
/// Between two consecutive breakpoints every map in the chain applies one fixed
/// translation, so the composed function is `x + c` there and its minimum sits at
/// the stretch's first point. Testing each interval start plus each breakpoint
/// inside an interval therefore covers every candidate.
pub fn minimum_over(inputs: &[InputInterval], chain: &MapChain) -> Result<Minimum, MinimizeError> {
    let breakpoints = chain.propagate_breakpoints_backward();
    let candidates = candidate_points(inputs, breakpoints.iter().copied());
    let (value, argument) = evaluate_all(&candidates, chain)?;
    Ok(Minimum {
        value,
        argument,
        breakpoints: breakpoints.len(),
        candidates: candidates.len(),
    })
}

/// Interval starts plus the breakpoints falling inside an interval, sorted and
/// deduplicated. `breakpoints` must be ascending.
pub fn candidate_points(
    inputs: &[InputInterval],
    breakpoints: impl IntoIterator<Item = i64>,
) -> Vec<i64> {
    let mut inputs = inputs.to_vec();
    inputs.sort_unstable();

    let mut breakpoints = breakpoints.into_iter().peekable();
    let mut points = Vec::with_capacity(inputs.len());
    for input in &inputs {
        points.push(input.start());
        while breakpoints.next_if(|&b| b < input.start()).is_some() {}
        while let Some(b) = breakpoints.next_if(|&b| b < input.end()) {
            points.push(b);
        }
    }
    points.sort_unstable();
    points.dedup();
    points
}

fn evaluate_all(points: &[i64], chain: &MapChain) -> Result<(i64, i64), MinimizeError> {
    points
        .par_iter()
        .map(|&p| (chain.evaluate(p), p))
        .min()
        .ok_or(MinimizeError::NoInput)
}
