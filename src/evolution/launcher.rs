use tracing::{debug, info, trace};

use super::{
    challenge::{Challenge, RouteChallenge},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    distance::DistanceMatrix,
    error::{Result, SolverError},
    population::{evaluate_population, initialize_population},
    rng::RandomNumberGenerator,
    selection::{selection_strategy::check_population, ElitistSelection},
    strategy::{BreedStrategy, GenerationalStrategy},
    tour::{check_locations, Tour},
};

/// The outcome of a run: the best tour of the final generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best tour found.
    pub tour: Tour,
    /// Its total distance.
    pub distance: f64,
    /// Its fitness score.
    pub fitness: f64,
    /// Number of generations evolved.
    pub generations: usize,
    /// Best distance of every evaluated generation, the final one included.
    pub best_distance_history: Vec<f64>,
}

/// Drives the generational loop: evaluate, carry the elites over, breed the
/// rest, repeat for a fixed number of generations.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy<Tour>,
    Chall: Challenge<Tour>,
{
    strategy: Strategy,
    challenge: Chall,
    elitism: ElitistSelection,
}

impl<Strategy, Chall> EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy<Tour>,
    Chall: Challenge<Tour> + Sync,
{
    /// Creates a new `EvolutionLauncher` with the specified breeding strategy and challenge.
    ///
    /// # Arguments
    ///
    /// * `strategy` - Produces the non-elite part of every generation.
    /// * `challenge` - Scores tours.
    pub fn new(strategy: Strategy, challenge: Chall) -> Self {
        Self {
            strategy,
            challenge,
            elitism: ElitistSelection::new(),
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Evolves tours over `num_locations` locations for
    /// `options.get_num_generations()` generations.
    ///
    /// # Returns
    ///
    /// The fittest tour of the final generation (the first one on a tie),
    /// its distance and the best distance of every generation.
    ///
    /// # Errors
    ///
    /// Fails before the first generation if the options are invalid, if the
    /// breed strategy cannot handle the population size, if
    /// `num_locations < 2` or if the depot is not one of the locations.
    /// Fails during the run if a tour has a non-finite fitness (zero total
    /// distance) or the breed strategy fails.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        num_locations: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;
        self.strategy.check(options.get_population_size())?;
        check_locations(num_locations, options.get_depot())?;

        let num_generations = options.get_num_generations();
        info!(
            locations = num_locations,
            population_size = options.get_population_size(),
            generations = num_generations,
            mutation_rate = options.get_mutation_rate(),
            elitism_count = options.get_elitism_count(),
            "Starting evolution"
        );

        let mut population = initialize_population(
            options.get_population_size(),
            num_locations,
            options.get_depot(),
            rng,
        )?;
        let mut history = Vec::with_capacity(num_generations + 1);

        for generation in 0..num_generations {
            let fitness = self.evaluate(&population, options)?;
            let best = best_index(&fitness)?;
            let best_distance = self.challenge.cost(&population[best]);
            history.push(best_distance);

            self.report(generation, &population, &fitness, best_distance, options);

            population = self.next_generation(&population, &fitness, options, rng)?;
        }

        let fitness = self.evaluate(&population, options)?;
        let best = best_index(&fitness)?;
        let tour = population.swap_remove(best);
        let distance = self.challenge.cost(&tour);
        history.push(distance);

        info!(distance, tour = %tour, "Evolution finished");

        Ok(EvolutionResult {
            tour,
            distance,
            fitness: fitness[best],
            generations: num_generations,
            best_distance_history: history,
        })
    }

    /// Builds the next generation from a scored one.
    ///
    /// The `elitism_count` fittest tours are cloned forward unchanged, ranked
    /// by a stable sort so ties keep population order. The breed strategy
    /// fills the remaining `population_size - elitism_count` slots.
    pub fn next_generation(
        &self,
        population: &[Tour],
        fitness: &[f64],
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Tour>> {
        check_population(population, fitness)?;

        let population_size = options.get_population_size();
        let mut next = Vec::with_capacity(population_size);

        let elites = self
            .elitism
            .select_indices(fitness, options.get_elitism_count())?;
        next.extend(elites.into_iter().map(|idx| population[idx].clone()));

        let offspring = self.strategy.breed(
            population,
            fitness,
            population_size.saturating_sub(next.len()),
            options,
            rng,
        )?;
        next.extend(offspring);

        Ok(next)
    }

    fn evaluate(&self, population: &[Tour], options: &EvolutionOptions) -> Result<Vec<f64>> {
        evaluate_population(population, &self.challenge, options.get_parallel_threshold())
    }

    fn report(
        &self,
        generation: usize,
        population: &[Tour],
        fitness: &[f64],
        best_distance: f64,
        options: &EvolutionOptions,
    ) {
        match options.get_log_level() {
            LogLevel::None => {}
            LogLevel::Minimal => debug!(generation, best_distance, "Generation evaluated"),
            LogLevel::Verbose => {
                debug!(generation, best_distance, "Generation evaluated");
                for (tour, score) in population.iter().zip(fitness) {
                    trace!(generation, fitness = *score, tour = %tour, "Individual");
                }
            }
        }
    }
}

/// Index of the highest fitness; the first one wins a tie.
fn best_index(fitness: &[f64]) -> Result<usize> {
    if fitness.is_empty() {
        return Err(SolverError::EmptyPopulation);
    }

    let mut best = 0;
    for (idx, &score) in fitness.iter().enumerate().skip(1) {
        if score > fitness[best] {
            best = idx;
        }
    }
    Ok(best)
}

/// Runs the standard solver over `matrix`: tournament selection sized by the
/// options, order crossover, swap mutation and elitism.
///
/// # Examples
///
/// ```
/// use tourga::distance::DistanceMatrix;
/// use tourga::evolution::{solve, EvolutionOptions};
/// use tourga::rng::RandomNumberGenerator;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 4.0, 5.0],
///     vec![2.0, 4.0, 0.0, 6.0],
///     vec![3.0, 5.0, 6.0, 0.0],
/// ]).unwrap();
/// let options = EvolutionOptions::builder()
///     .population_size(20)
///     .num_generations(50)
///     .build();
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let result = solve(matrix, &options, &mut rng).unwrap();
/// assert!(result.distance <= 14.0);
/// ```
pub fn solve(
    matrix: DistanceMatrix,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult> {
    options.validate()?;
    let strategy = GenerationalStrategy::from_options(options)?;
    let launcher = EvolutionLauncher::new(strategy, RouteChallenge::new(matrix));
    launcher.evolve(options, launcher.challenge().num_locations(), rng)
}
