//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies that fill
//! the non-elite part of the next generation from the current one.
pub mod generational;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces offspring from the current, already scored, population.
pub trait BreedStrategy<Pheno: Phenotype>
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds `num_offspring` new individuals.
    ///
    /// ## Parameters
    ///
    /// - `population`: The current generation.
    /// - `fitness`: Fitness scores, index-aligned with `population`.
    /// - `num_offspring`: How many individuals to produce.
    /// - `evol_options`: The run's options (mutation rate and so on).
    /// - `rng`: The random number generator driving selection and the operators.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty or the fitness vector does not match it
    /// - Selection cannot be applied to the population
    /// - Recombination rejects the selected parents
    fn breed(
        &self,
        population: &[Pheno],
        fitness: &[f64],
        num_offspring: usize,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>>;

    /// Checks, before the first generation, that the strategy can breed
    /// from populations of `population_size`.
    fn check(&self, _population_size: usize) -> Result<()> {
        Ok(())
    }
}

pub use generational::GenerationalStrategy;
