use std::cmp::Ordering;

use crate::error::{Result, SolverError};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that selects the best individuals based on fitness.
///
/// Individuals are ranked by descending fitness with a stable sort, so among
/// equal scores the one earlier in the population ranks first. This is the
/// elitism step: the selected individuals are carried into the next
/// generation unchanged.
///
/// # Examples
///
/// ```
/// use tourga::selection::ElitistSelection;
///
/// let fitness = vec![0.5, 0.8, 0.3, 0.8];
/// let elites = ElitistSelection::new().select_indices(&fitness, 3).unwrap();
/// assert_eq!(elites, vec![1, 3, 0]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }

    /// Returns the indices of the `num_to_select` fittest individuals, best first.
    ///
    /// NaN scores rank below every number.
    ///
    /// # Errors
    ///
    /// Returns an error if more individuals are requested than exist.
    pub fn select_indices(&self, fitness: &[f64], num_to_select: usize) -> Result<Vec<usize>> {
        if num_to_select > fitness.len() {
            return Err(SolverError::Configuration(format!(
                "Cannot select {} elites from a population of {}",
                num_to_select,
                fitness.len()
            )));
        }

        let mut ranked: Vec<usize> = (0..fitness.len()).collect();
        ranked.sort_by(|&a, &b| {
            let (fa, fb) = (fitness[a], fitness[b]);
            fb.partial_cmp(&fa).unwrap_or_else(|| {
                if fa.is_nan() && fb.is_nan() {
                    Ordering::Equal
                } else if fa.is_nan() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
        });
        ranked.truncate(num_to_select);

        Ok(ranked)
    }
}

impl<P> SelectionStrategy<P> for ElitistSelection
where
    P: Phenotype,
{
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        check_population(population, fitness)?;

        Ok(self
            .select_indices(fitness, num_to_select)?
            .into_iter()
            .map(|idx| population[idx].clone())
            .collect())
    }
}
