//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface for types that represent
//! individuals in the evolutionary search. Both operators receive the random
//! number generator explicitly so a seeded run is reproducible.
//!
//! ## Example
//!
//! ```rust
//! use tourga::error::Result;
//! use tourga::phenotype::Phenotype;
//! use tourga::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Bits {
//!     bits: Vec<bool>,
//! }
//!
//! impl Phenotype for Bits {
//!     fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator) -> Result<()> {
//!         let cut = rng.index(self.bits.len());
//!         self.bits[cut..].copy_from_slice(&other.bits[cut..]);
//!         Ok(())
//!     }
//!
//!     fn mutate(&mut self, mutation_rate: f64, rng: &mut RandomNumberGenerator) -> bool {
//!         if rng.probability() < mutation_rate {
//!             let i = rng.index(self.bits.len());
//!             self.bits[i] = !self.bits[i];
//!             return true;
//!         }
//!         false
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in an evolutionary algorithm.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`
/// and `Sync` so populations can be scored in parallel.
pub trait Phenotype: Clone + Debug + Send + Sync {
    /// Recombines `self` with `other`, replacing `self` with the offspring.
    ///
    /// `self` plays the role of the first parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the two parents are not compatible.
    fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator) -> Result<()>;

    /// With probability `mutation_rate`, perturbs the individual in place.
    ///
    /// Returns `true` if the individual changed.
    fn mutate(&mut self, mutation_rate: f64, rng: &mut RandomNumberGenerator) -> bool;
}
