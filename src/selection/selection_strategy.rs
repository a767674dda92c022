use std::fmt::Debug;

use crate::error::{Result, SolverError};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// Selection strategies choose individuals from a population based on their
/// fitness scores. Fitness is always "higher is better".
///
/// # Examples
///
/// ```
/// use tourga::selection::{SelectionStrategy, TournamentSelection};
/// use tourga::rng::RandomNumberGenerator;
/// use tourga::tour::Tour;
/// use tourga::error::Result;
///
/// fn main() -> Result<()> {
///     let mut rng = RandomNumberGenerator::from_seed(1);
///     let population = vec![
///         Tour::from_stops(vec![0, 1, 2, 3, 0], 4, 0)?,
///         Tour::from_stops(vec![0, 2, 1, 3, 0], 4, 0)?,
///         Tour::from_stops(vec![0, 3, 2, 1, 0], 4, 0)?,
///     ];
///     let fitness = vec![0.1, 0.3, 0.2];
///
///     let selection = TournamentSelection::new(3)?;
///     let parents = selection.select(&population, &fitness, 2, &mut rng)?;
///
///     // A tournament over the whole population always picks the fittest.
///     assert_eq!(parents, vec![population[1].clone(), population[1].clone()]);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<P>: Debug + Send + Sync
where
    P: Phenotype,
{
    /// Selects `num_to_select` individuals from the population.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population of individuals.
    /// * `fitness` - The fitness scores, index-aligned with `population`.
    /// * `num_to_select` - The number of individuals to select.
    /// * `rng` - The random number generator for strategies that need one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - The strategy cannot be applied to a population of this size
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>>;

    /// Checks that the strategy can run on populations of `population_size`.
    ///
    /// Called once before the first generation so that a mismatch is
    /// reported before any work is done.
    fn check(&self, _population_size: usize) -> Result<()> {
        Ok(())
    }
}

pub(crate) fn check_population<P>(population: &[P], fitness: &[f64]) -> Result<()> {
    if population.is_empty() {
        return Err(SolverError::EmptyPopulation);
    }

    if fitness.len() != population.len() {
        return Err(SolverError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    Ok(())
}
