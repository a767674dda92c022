//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every tunable of a run: population
//! size, generation budget, mutation rate, elitism, tournament size, the
//! depot index, the population size from which fitness is scored in
//! parallel, and how much progress to log.
//!
//! ## Example
//!
//! ```rust
//! use tourga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(50)
//!     .num_generations(200)
//!     .mutation_rate(0.2)
//!     .elitism_count(1)
//!     .log_level(LogLevel::None)
//!     .build();
//! assert!(options.validate().is_ok());
//!
//! let defaults = EvolutionOptions::default();
//! assert_eq!(defaults.get_population_size(), 100);
//! assert_eq!(defaults.get_num_generations(), 500);
//! ```
//!
//! ## Defaults
//!
//! | option | default |
//! |---|---|
//! | `population_size` | 100 |
//! | `num_generations` | 500 |
//! | `mutation_rate` | 0.1 |
//! | `elitism_count` | 2 |
//! | `tournament_size` | 5 |
//! | `depot` | 0 |
//! | `parallel_threshold` | 1000 |
//! | `log_level` | `Minimal` |

use crate::error::{Result, SolverError};

/// How much per-generation progress the launcher reports through `tracing`.
///
/// - `Verbose`: the best distance of every generation at `debug`, and every
///   individual's distance at `trace`.
/// - `Minimal`: the best distance of every generation at `debug`.
/// - `None`: only the start and end of the run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    num_generations: usize,
    mutation_rate: f64,
    elitism_count: usize,
    tournament_size: usize,
    depot: usize,
    /// Minimum population size scored on the rayon pool
    parallel_threshold: usize,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_elitism_count(&self) -> usize {
        self.elitism_count
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_depot(&self) -> usize {
        self.depot
    }

    /// Returns the minimum population size scored in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_elitism_count(&mut self, elitism_count: usize) {
        self.elitism_count = elitism_count;
    }

    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    pub fn set_depot(&mut self, depot: usize) {
        self.depot = depot;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks that the options describe a runnable configuration.
    ///
    /// This does not know the number of locations; the launcher checks the
    /// depot against the input separately.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Configuration` if:
    /// - `population_size` or `num_generations` is zero
    /// - `mutation_rate` is outside `[0, 1]`
    /// - `elitism_count` exceeds `population_size`
    /// - `tournament_size` is zero or exceeds `population_size`
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(SolverError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.num_generations == 0 {
            return Err(SolverError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SolverError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if self.elitism_count > self.population_size {
            return Err(SolverError::Configuration(format!(
                "Elitism count ({}) cannot exceed population size ({})",
                self.elitism_count, self.population_size
            )));
        }

        if self.tournament_size == 0 {
            return Err(SolverError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        if self.tournament_size > self.population_size {
            return Err(SolverError::Configuration(format!(
                "Tournament size ({}) cannot exceed population size ({})",
                self.tournament_size, self.population_size
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Options left unset keep their default value.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 500,
            mutation_rate: 0.1,
            elitism_count: 2,
            tournament_size: 5,
            depot: 0,
            parallel_threshold: 1000,
            log_level: LogLevel::Minimal,
        }
    }
}

/// Builder for `EvolutionOptions`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    mutation_rate: Option<f64>,
    elitism_count: Option<usize>,
    tournament_size: Option<usize>,
    depot: Option<usize>,
    parallel_threshold: Option<usize>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn elitism_count(mut self, value: usize) -> Self {
        self.elitism_count = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn depot(mut self, value: usize) -> Self {
        self.depot = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. Validation happens when the
    /// options are used, see [`EvolutionOptions::validate`].
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(default.population_size),
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            elitism_count: self.elitism_count.unwrap_or(default.elitism_count),
            tournament_size: self.tournament_size.unwrap_or(default.tournament_size),
            depot: self.depot.unwrap_or(default.depot),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(default.parallel_threshold),
            log_level: self.log_level.unwrap_or(default.log_level),
        }
    }
}
