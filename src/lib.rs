pub mod distance;
pub mod error;
pub mod evolution;
pub mod operators;
pub mod phenotype;
pub mod plot;
pub mod population;
pub mod rng;
pub mod selection;
pub mod strategy;
pub mod tour;

// Re-export commonly used types for convenience
pub use distance::DistanceMatrix;
pub use error::{OptionExt, Result, ResultExt, SolverError};
pub use evolution::{solve, EvolutionOptions, EvolutionResult, LogLevel};
pub use rng::RandomNumberGenerator;
pub use tour::Tour;
