//! # Genetic Operators
//!
//! Permutation-preserving recombination and mutation over depot-framed
//! stop sequences. Both operators work on plain slices so they can be reused
//! and benchmarked without building a [`Tour`](crate::tour::Tour).

pub mod crossover;
pub mod mutation;

pub use crossover::{order_crossover, order_crossover_at};
pub use mutation::swap_mutation;
