//! # Error Types
//!
//! This module defines the error type shared by every part of the solver.
//! Nothing in the solver is retried: configuration problems are reported
//! before the first generation runs, and degenerate input (a tour whose
//! distance is zero) aborts the run when it is evaluated.
//!
//! ## Examples
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use tourga::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_matrix(path: &str) -> Result<()> {
//!     File::open(path).context("Failed to open distance matrix")?;
//!     Ok(())
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use tourga::error::{SolverError, OptionExt};
//!
//! fn first_stop(stops: &[usize]) -> tourga::error::Result<usize> {
//!     stops.first().copied().ok_or_else_solver(|| SolverError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while loading input or evolving tours.
#[derive(Error, Debug)]
pub enum SolverError {
    /// An option is out of range or inconsistent with the input.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The distance matrix is missing, ragged, non-square or holds invalid values.
    #[error("Invalid distance matrix: {0}")]
    InvalidMatrix(String),

    /// A sequence of stops does not form a depot-framed permutation.
    #[error("Invalid tour: {0}")]
    InvalidTour(String),

    /// An operation needed at least one individual.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A fitness value could not be computed, e.g. a zero-length tour.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error raised by the CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use tourga::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> tourga::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `SolverError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| SolverError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, SolverError>` using `err_fn`
    /// to build the error.
    fn ok_or_else_solver<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SolverError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_solver<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SolverError,
    {
        self.ok_or_else(err_fn)
    }
}
