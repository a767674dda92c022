//! Order crossover (OX).
//!
//! The offspring inherits a contiguous segment of the first parent verbatim
//! and the remaining locations in the relative order they appear in the
//! second parent. The fill cursor starts right after the segment and wraps
//! back to the first interior slot, never touching the two depot slots.
//!
//! After the segment `[start, end)` is copied, the interior has exactly as
//! many free slots as there are locations left to place, so the wrapping
//! cursor stops just short of `start` and never overwrites a filled slot.

use crate::error::{Result, SolverError};
use crate::rng::RandomNumberGenerator;

const UNFILLED: usize = usize::MAX;

/// Recombines two depot-framed tours with randomly chosen cut points.
///
/// The cut points are two distinct positions drawn uniformly from
/// `[1, len - 1)`, sorted so that `start < end`. A tour with a single
/// non-depot location has only one valid arrangement and is returned as is.
///
/// # Errors
///
/// Returns `SolverError::InvalidTour` if the parents differ in length or are
/// not permutations of the same locations.
///
/// # Examples
///
/// ```
/// use tourga::operators::order_crossover;
/// use tourga::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let child = order_crossover(&[0, 1, 2, 3, 4, 0], &[0, 4, 3, 2, 1, 0], 0, &mut rng).unwrap();
///
/// let mut interior = child[1..5].to_vec();
/// interior.sort_unstable();
/// assert_eq!(interior, vec![1, 2, 3, 4]);
/// assert_eq!((child[0], child[5]), (0, 0));
/// ```
pub fn order_crossover(
    parent1: &[usize],
    parent2: &[usize],
    depot: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<usize>> {
    check_lengths(parent1, parent2)?;

    let len = parent1.len();
    if len < 4 {
        return Ok(parent1.to_vec());
    }

    let mut cuts = rng.sample_distinct(len - 2, 2);
    cuts.sort_unstable();
    order_crossover_at(parent1, parent2, depot, cuts[0] + 1, cuts[1] + 1)
}

/// Recombines two depot-framed tours around the segment `[start, end)`.
///
/// Deterministic: the same parents and cut points always yield the same
/// offspring.
///
/// # Errors
///
/// Returns `SolverError::InvalidTour` if the parents differ in length, if the
/// cut points do not satisfy `1 <= start < end <= len - 1`, or if the parents
/// are not permutations of the same locations.
///
/// # Examples
///
/// ```
/// use tourga::operators::order_crossover_at;
///
/// let child = order_crossover_at(
///     &[0, 1, 2, 3, 4, 5, 0],
///     &[0, 5, 4, 3, 2, 1, 0],
///     0,
///     2,
///     4,
/// ).unwrap();
/// assert_eq!(child, vec![0, 1, 2, 3, 5, 4, 0]);
/// ```
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    depot: usize,
    start: usize,
    end: usize,
) -> Result<Vec<usize>> {
    check_lengths(parent1, parent2)?;

    let len = parent1.len();
    let last = len - 1;
    if start < 1 || start >= end || end > last {
        return Err(SolverError::InvalidTour(format!(
            "Cut points ({}, {}) must satisfy 1 <= start < end <= {}",
            start, end, last
        )));
    }

    // A tour over N locations has N + 1 stops, so genes are in [0, last).
    let mut seen = vec![false; last];
    mark_seen(&mut seen, depot)?;

    let mut offspring = vec![UNFILLED; len];
    for pos in start..end {
        let gene = parent1[pos];
        mark_seen(&mut seen, gene)?;
        offspring[pos] = gene;
    }

    let mut cursor = end;
    for &gene in &parent2[1..last] {
        if gene >= seen.len() {
            return Err(out_of_range(gene, seen.len()));
        }
        if seen[gene] {
            continue;
        }
        if cursor >= last {
            cursor = 1;
        }
        offspring[cursor] = gene;
        seen[gene] = true;
        cursor += 1;
    }

    offspring[0] = depot;
    offspring[last] = depot;

    if offspring.contains(&UNFILLED) {
        return Err(SolverError::InvalidTour(
            "Parents are not permutations of the same locations".to_string(),
        ));
    }

    Ok(offspring)
}

fn check_lengths(parent1: &[usize], parent2: &[usize]) -> Result<()> {
    if parent1.len() != parent2.len() {
        return Err(SolverError::InvalidTour(format!(
            "Parent lengths differ ({} vs {})",
            parent1.len(),
            parent2.len()
        )));
    }
    if parent1.len() < 3 {
        return Err(SolverError::InvalidTour(format!(
            "A tour needs at least 3 stops, got {}",
            parent1.len()
        )));
    }
    Ok(())
}

fn mark_seen(seen: &mut [bool], gene: usize) -> Result<()> {
    match seen.get_mut(gene) {
        Some(slot) => {
            *slot = true;
            Ok(())
        }
        None => Err(out_of_range(gene, seen.len())),
    }
}

fn out_of_range(gene: usize, num_locations: usize) -> SolverError {
    SolverError::InvalidTour(format!(
        "Location {} is out of range for {} locations",
        gene, num_locations
    ))
}
