//! # GenerationalStrategy
//!
//! Each offspring is produced from two parents picked by a selection
//! strategy: the first parent is recombined with the second, then mutated
//! with the run's mutation rate.

use tracing::trace;

use super::BreedStrategy;
use crate::{
    error::{OptionExt, Result, SolverError},
    evolution::options::EvolutionOptions,
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    selection::{SelectionStrategy, TournamentSelection},
};

#[derive(Debug, Clone)]
pub struct GenerationalStrategy<S> {
    selection: S,
}

impl<S> GenerationalStrategy<S> {
    pub fn new(selection: S) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }
}

impl GenerationalStrategy<TournamentSelection> {
    /// Tournament selection sized by `options.get_tournament_size()`.
    pub fn from_options(options: &EvolutionOptions) -> Result<Self> {
        Ok(Self::new(TournamentSelection::new(
            options.get_tournament_size(),
        )?))
    }
}

impl Default for GenerationalStrategy<TournamentSelection> {
    fn default() -> Self {
        Self::new(TournamentSelection::default())
    }
}

impl<Pheno, S> BreedStrategy<Pheno> for GenerationalStrategy<S>
where
    Pheno: Phenotype,
    S: SelectionStrategy<Pheno> + Clone,
{
    fn breed(
        &self,
        population: &[Pheno],
        fitness: &[f64],
        num_offspring: usize,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>> {
        if population.is_empty() {
            return Err(SolverError::EmptyPopulation);
        }

        let mut offspring = Vec::with_capacity(num_offspring);
        let mut mutations = 0usize;

        for _ in 0..num_offspring {
            let mut parents = self
                .selection
                .select(population, fitness, 2, rng)?
                .into_iter();
            let mut child = parents
                .next()
                .ok_or_else_solver(|| SolverError::EmptyPopulation)?;
            let other = parents
                .next()
                .ok_or_else_solver(|| SolverError::EmptyPopulation)?;

            child.crossover(&other, rng)?;
            if child.mutate(evol_options.get_mutation_rate(), rng) {
                mutations += 1;
            }

            offspring.push(child);
        }

        trace!(offspring = num_offspring, mutations, "Bred offspring");
        Ok(offspring)
    }

    fn check(&self, population_size: usize) -> Result<()> {
        <S as SelectionStrategy<Pheno>>::check(&self.selection, population_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::ElitistSelection;
    use crate::tour::{validate_stops, Tour};

    fn population(rng: &mut RandomNumberGenerator) -> Vec<Tour> {
        (0..10).map(|_| Tour::random(8, 0, rng).unwrap()).collect()
    }

    #[test]
    fn test_breeds_requested_number_of_valid_tours() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = population(&mut rng);
        let fitness: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let options = EvolutionOptions::builder().mutation_rate(0.5).build();

        let strategy = GenerationalStrategy::new(TournamentSelection::new(3).unwrap());
        let offspring = strategy
            .breed(&population, &fitness, 25, &options, &mut rng)
            .unwrap();

        assert_eq!(offspring.len(), 25);
        for tour in &offspring {
            assert!(validate_stops(tour.stops(), 8, 0).is_ok());
        }
    }

    #[test]
    fn test_any_selection_strategy_can_drive_breeding() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let population = population(&mut rng);
        let mut fitness = vec![0.0; 10];
        fitness[4] = 1.0;
        let options = EvolutionOptions::builder().mutation_rate(0.0).build();

        // Elitist selection always hands back individuals 4 and 0
        let strategy = GenerationalStrategy::new(ElitistSelection::new());
        let offspring = strategy
            .breed(&population, &fitness, 5, &options, &mut rng)
            .unwrap();
        assert_eq!(offspring.len(), 5);
        for tour in &offspring {
            assert!(validate_stops(tour.stops(), 8, 0).is_ok());
        }
    }

    #[test]
    fn test_from_options_uses_tournament_size() {
        let options = EvolutionOptions::builder().tournament_size(7).build();
        let strategy = GenerationalStrategy::from_options(&options).unwrap();
        assert_eq!(strategy.selection().tournament_size(), 7);

        let options = EvolutionOptions::builder().tournament_size(0).build();
        assert!(GenerationalStrategy::from_options(&options).is_err());
    }

    #[test]
    fn test_empty_population() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let population: Vec<Tour> = Vec::new();
        let strategy = GenerationalStrategy::<TournamentSelection>::default();
        let options = EvolutionOptions::default();
        let result = strategy.breed(&population, &[], 3, &options, &mut rng);
        assert!(matches!(result, Err(SolverError::EmptyPopulation)));
    }

    #[test]
    fn test_tournament_too_large_is_reported() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let population = population(&mut rng);
        let fitness = vec![1.0; 10];
        let strategy = GenerationalStrategy::new(TournamentSelection::new(11).unwrap());
        let options = EvolutionOptions::default();
        let result = strategy.breed(&population, &fitness, 1, &options, &mut rng);
        assert!(matches!(result, Err(SolverError::Configuration(_))));
    }

    #[test]
    fn test_check_delegates_to_selection() {
        let strategy = GenerationalStrategy::new(TournamentSelection::new(8).unwrap());
        assert!(BreedStrategy::<Tour>::check(&strategy, 8).is_ok());
        assert!(matches!(
            BreedStrategy::<Tour>::check(&strategy, 7),
            Err(SolverError::Configuration(_))
        ));
    }
}
