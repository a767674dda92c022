use crate::error::{Result, SolverError};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament samples `tournament_size` distinct individuals uniformly
/// without replacement and picks the fittest; on a tie the participant drawn
/// first wins. Tournaments are independent of each other, so the same
/// individual can win several times.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(SolverError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament is larger than the population.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        self.check_size(fitness.len())?;

        let participants = rng.sample_distinct(fitness.len(), self.tournament_size);

        let mut best_idx = participants[0];
        for &idx in &participants[1..] {
            if fitness[idx] > fitness[best_idx] {
                best_idx = idx;
            }
        }

        Ok(best_idx)
    }

    fn check_size(&self, population_size: usize) -> Result<()> {
        if self.tournament_size == 0 {
            return Err(SolverError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if self.tournament_size > population_size {
            return Err(SolverError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size, population_size
            )));
        }
        Ok(())
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 5 }
    }
}

impl<P> SelectionStrategy<P> for TournamentSelection
where
    P: Phenotype,
{
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        check_population(population, fitness)?;

        let mut selected = Vec::with_capacity(num_to_select);
        for _ in 0..num_to_select {
            let winner_idx = self.run_tournament(fitness, rng)?;
            selected.push(population[winner_idx].clone());
        }

        Ok(selected)
    }

    fn check(&self, population_size: usize) -> Result<()> {
        self.check_size(population_size)
    }
}
