//! Pairwise travel costs between locations.

pub mod matrix;

pub use matrix::DistanceMatrix;
